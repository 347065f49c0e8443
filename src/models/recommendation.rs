use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperaturePreference {
    Hot,
    Iced,
    Both,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TasteProfile {
    pub sweetness: u8,
    pub acidity: u8,
    pub intensity: u8,
    pub temperature_preference: TemperaturePreference,
    pub milk_preference: Vec<String>,
    pub flavor_notes: Vec<String>,
    pub preferred_times: Vec<String>,
}

impl TasteProfile {
    /// Profile shown for the demo guest.
    pub fn demo() -> Self {
        Self {
            sweetness: 65,
            acidity: 40,
            intensity: 75,
            temperature_preference: TemperaturePreference::Both,
            milk_preference: strings(&["Oat", "Almond"]),
            flavor_notes: strings(&["Chocolate", "Nutty", "Caramel"]),
            preferred_times: strings(&["Morning", "Afternoon"]),
        }
    }
}

/// A recommendation candidate with its match score out of 100.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub match_score: u8,
    pub reasons: Vec<String>,
    pub mood_enhancement: String,
    pub origin: String,
    pub price: f64,
    pub taste_notes: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn recommendation_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "ai-1".to_string(),
            name: "Neural Blend Espresso".to_string(),
            match_score: 94,
            reasons: strings(&[
                "Matches your high intensity preference",
                "Perfect chocolate notes for your taste",
            ]),
            mood_enhancement: "Enhances focus and mental clarity".to_string(),
            origin: "Ethiopian Highlands".to_string(),
            price: 7.50,
            taste_notes: strings(&["Dark Chocolate", "Caramel", "Orange Zest"]),
        },
        CatalogItem {
            id: "ai-2".to_string(),
            name: "Algorithmic Pour-Over".to_string(),
            match_score: 87,
            reasons: strings(&[
                "Balanced acidity for your preference",
                "Nutty notes you love",
            ]),
            mood_enhancement: "Promotes creative thinking".to_string(),
            origin: "Colombian Andes".to_string(),
            price: 6.75,
            taste_notes: strings(&["Walnut", "Honey", "Vanilla"]),
        },
        CatalogItem {
            id: "ai-3".to_string(),
            name: "Predictive Cold Brew".to_string(),
            match_score: 82,
            reasons: strings(&["Low acidity profile", "Smooth intensity level"]),
            mood_enhancement: "Sustained energy without jitters".to_string(),
            origin: "Brazilian Cerrado".to_string(),
            price: 5.50,
            taste_notes: strings(&["Smooth Chocolate", "Toffee", "Clean Finish"]),
        },
    ]
}
