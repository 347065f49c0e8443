use serde::Serialize;

use super::mood::Mood;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MoodRoom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ambience: String,
    pub scent: String,
    pub lighting: String,
    pub sounds: String,
    pub capacity: u16,
    pub features: Vec<String>,
    pub mood_match: Vec<Mood>,
    pub available: bool,
}

impl MoodRoom {
    pub fn matches_mood(&self, mood: Mood) -> bool {
        self.mood_match.contains(&mood)
    }
}

struct RoomSeed<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    ambience: &'a str,
    scent: &'a str,
    lighting: &'a str,
    sounds: &'a str,
    capacity: u16,
    features: [&'a str; 4],
    mood_match: &'a [Mood],
    available: bool,
}

impl From<RoomSeed<'_>> for MoodRoom {
    fn from(seed: RoomSeed<'_>) -> Self {
        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            ambience: seed.ambience.to_string(),
            scent: seed.scent.to_string(),
            lighting: seed.lighting.to_string(),
            sounds: seed.sounds.to_string(),
            capacity: seed.capacity,
            features: seed.features.iter().map(|f| f.to_string()).collect(),
            mood_match: seed.mood_match.to_vec(),
            available: seed.available,
        }
    }
}

pub fn mood_rooms() -> Vec<MoodRoom> {
    vec![
        RoomSeed {
            id: "reading-sanctuary",
            name: "Reading Sanctuary",
            description: "A tranquil haven designed for deep contemplation and literary escape.",
            ambience: "Warm, cozy, and peaceful",
            scent: "Vanilla & Sandalwood",
            lighting: "Soft amber reading lamps",
            sounds: "Gentle rainfall",
            capacity: 12,
            features: [
                "Individual reading nooks",
                "Book library",
                "Silence policy",
                "Comfortable armchairs",
            ],
            mood_match: &[Mood::Calm],
            available: true,
        }
        .into(),
        RoomSeed {
            id: "rhythm-lounge",
            name: "Rhythm Lounge",
            description: "An energizing space where music and movement fuel creativity and connection.",
            ambience: "Vibrant, dynamic, and inspiring",
            scent: "Citrus & Mint",
            lighting: "Color-changing LED strips",
            sounds: "Curated upbeat playlists",
            capacity: 20,
            features: [
                "High-quality sound system",
                "Standing desks",
                "Movement space",
                "Collaborative tables",
            ],
            mood_match: &[Mood::Energized],
            available: true,
        }
        .into(),
        RoomSeed {
            id: "nature-nook",
            name: "Nature Nook",
            description: "A biophilic retreat that brings the serenity of nature indoors.",
            ambience: "Fresh, grounding, and organic",
            scent: "Pine & Eucalyptus",
            lighting: "Natural light with plant accents",
            sounds: "Forest ambience",
            capacity: 16,
            features: [
                "Living plant walls",
                "Natural materials",
                "Water features",
                "Garden views",
            ],
            mood_match: &[Mood::Calm, Mood::Focused],
            available: false,
        }
        .into(),
        RoomSeed {
            id: "innovation-lab",
            name: "Innovation Lab",
            description: "A high-focus environment designed to amplify productivity and deep work.",
            ambience: "Clean, minimal, and focused",
            scent: "Peppermint & Rosemary",
            lighting: "Bright task lighting",
            sounds: "White noise & focus tracks",
            capacity: 8,
            features: [
                "Whiteboards",
                "High-speed wifi",
                "Privacy pods",
                "Ergonomic workstations",
            ],
            mood_match: &[Mood::Focused],
            available: true,
        }
        .into(),
        RoomSeed {
            id: "social-sphere",
            name: "Social Sphere",
            description: "A warm gathering space perfect for conversations and connections.",
            ambience: "Welcoming, social, and lively",
            scent: "Warm Spices & Coffee",
            lighting: "Warm pendant lights",
            sounds: "Soft jazz & conversation",
            capacity: 25,
            features: [
                "Community tables",
                "Conversation nooks",
                "Board games",
                "Event space",
            ],
            mood_match: &[Mood::Romantic, Mood::Creative],
            available: true,
        }
        .into(),
    ]
}
