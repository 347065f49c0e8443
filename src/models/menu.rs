use serde::Serialize;

use super::mood::Mood;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CoffeeItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub origin: String,
    pub strength: u8,
    pub brew_time: String,
    pub mood_match: Vec<Mood>,
    pub featured: bool,
    pub rating: f32,
}

impl CoffeeItem {
    pub fn matches_mood(&self, mood: Mood) -> bool {
        self.mood_match.contains(&mood)
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    origin: &str,
    strength: u8,
    brew_time: &str,
    mood: Mood,
    featured: bool,
    rating: f32,
) -> CoffeeItem {
    CoffeeItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        origin: origin.to_string(),
        strength,
        brew_time: brew_time.to_string(),
        mood_match: vec![mood],
        featured,
        rating,
    }
}

/// The signature blends on the lounge menu.
pub fn signature_menu() -> Vec<CoffeeItem> {
    vec![
        item(
            "serenity-blend",
            "Serenity Blend",
            "A smooth, gentle coffee with notes of vanilla and honey. Perfect for contemplation.",
            6.50,
            "Colombia",
            2,
            "4 min",
            Mood::Calm,
            true,
            4.8,
        ),
        item(
            "lightning-roast",
            "Lightning Roast",
            "Bold and energizing with bright citrus notes and a robust finish.",
            7.00,
            "Ethiopia",
            5,
            "3 min",
            Mood::Energized,
            false,
            4.9,
        ),
        item(
            "focus-flow",
            "Focus Flow",
            "Balanced medium roast with clarity-enhancing properties and subtle chocolate notes.",
            6.75,
            "Guatemala",
            3,
            "3.5 min",
            Mood::Focused,
            false,
            4.7,
        ),
        item(
            "inspiration-blend",
            "Inspiration Blend",
            "Complex and artistic with floral undertones and a creative spark.",
            7.25,
            "Kenya",
            4,
            "4.5 min",
            Mood::Creative,
            false,
            4.6,
        ),
        item(
            "passion-pour",
            "Passion Pour",
            "Rich and romantic with deep berry notes and a velvety finish.",
            8.00,
            "Costa Rica",
            3,
            "5 min",
            Mood::Romantic,
            true,
            4.9,
        ),
    ]
}
