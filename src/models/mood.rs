use serde::{Deserialize, Serialize};

/// Highest match score a mood adjustment may produce.
pub const MAX_MATCH_SCORE: u8 = 98;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Energized,
    Focused,
    Creative,
    Romantic,
}

/// How a mood shifts recommendation scores and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodAdjustment {
    pub score_delta: u8,
    pub intensity_shift: i8,
    pub acidity_shift: i8,
    pub enhancement: &'static str,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Calm,
        Mood::Energized,
        Mood::Focused,
        Mood::Creative,
        Mood::Romantic,
    ];

    /// Exact lookup of one of the five lowercase tags.
    pub fn from_tag(tag: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.tag() == tag)
    }

    /// Lenient parse for user input: trims and lowercases before [`Mood::from_tag`].
    /// Unknown tags yield `None` rather than an error.
    pub fn parse(input: &str) -> Option<Mood> {
        Mood::from_tag(&input.trim().to_lowercase())
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Energized => "energized",
            Mood::Focused => "focused",
            Mood::Creative => "creative",
            Mood::Romantic => "romantic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Calm => "Calm",
            Mood::Energized => "Energized",
            Mood::Focused => "Focused",
            Mood::Creative => "Creative",
            Mood::Romantic => "Romantic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Calm => "Peaceful, relaxed, mindful",
            Mood::Energized => "Vibrant, motivated, active",
            Mood::Focused => "Concentrated, productive, sharp",
            Mood::Creative => "Inspired, imaginative, innovative",
            Mood::Romantic => "Intimate, warm, connected",
        }
    }

    pub fn adjustment(&self) -> MoodAdjustment {
        match self {
            Mood::Calm => MoodAdjustment {
                score_delta: 5,
                intensity_shift: -10,
                acidity_shift: -15,
                enhancement: "Promotes relaxation and mindfulness",
            },
            Mood::Energized => MoodAdjustment {
                score_delta: 5,
                intensity_shift: 15,
                acidity_shift: 10,
                enhancement: "Boosts energy and motivation",
            },
            Mood::Focused => MoodAdjustment {
                score_delta: 5,
                intensity_shift: 10,
                acidity_shift: 0,
                enhancement: "Enhances concentration and mental clarity",
            },
            Mood::Creative => MoodAdjustment {
                score_delta: 5,
                intensity_shift: 5,
                acidity_shift: 5,
                enhancement: "Stimulates creative thinking and inspiration",
            },
            Mood::Romantic => MoodAdjustment {
                score_delta: 5,
                intensity_shift: -5,
                acidity_shift: -10,
                enhancement: "Creates warm, intimate feelings",
            },
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
