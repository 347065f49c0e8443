use chrono::NaiveDate;
use serde::Serialize;

/// Farm-to-cup story revealed by an AR scan.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CoffeeOrigin {
    pub id: String,
    pub name: String,
    pub farm: String,
    pub location: String,
    pub elevation: String,
    pub climate: String,
    pub processing: String,
    pub harvest_season: String,
    pub farmer: String,
    pub certifications: Vec<String>,
    pub story: String,
    pub sustainability_score: u8,
    pub flavor_profile: Vec<String>,
    pub roast_date: Option<NaiveDate>,
    pub journey_days: u16,
}

/// Coffee shown when a scan does not resolve to a known card.
pub const DEFAULT_ORIGIN_ID: &str = "serenity-blend";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn coffee_origins() -> Vec<CoffeeOrigin> {
    vec![
        CoffeeOrigin {
            id: "serenity-blend".to_string(),
            name: "Serenity Blend".to_string(),
            farm: "Finca La Esperanza".to_string(),
            location: "Huila, Colombia".to_string(),
            elevation: "1,600-1,800m".to_string(),
            climate: "Tropical with dry season".to_string(),
            processing: "Washed & Sun-dried".to_string(),
            harvest_season: "October - February".to_string(),
            farmer: "Maria Elena Vasquez".to_string(),
            certifications: strings(&["Organic", "Fair Trade", "Bird Friendly"]),
            story: "Grown by third-generation coffee farmer Maria Elena on her family's \
                    12-hectare farm nestled in the Colombian Andes. Each bean is hand-picked \
                    at perfect ripeness and processed using traditional methods passed down \
                    through generations."
                .to_string(),
            sustainability_score: 95,
            flavor_profile: strings(&["Chocolate", "Caramel", "Orange", "Floral"]),
            roast_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            journey_days: 14,
        },
        CoffeeOrigin {
            id: "lightning-roast".to_string(),
            name: "Lightning Roast".to_string(),
            farm: "Konga Cooperative".to_string(),
            location: "Yirgacheffe, Ethiopia".to_string(),
            elevation: "1,900-2,200m".to_string(),
            climate: "Highland tropical".to_string(),
            processing: "Natural & Honey".to_string(),
            harvest_season: "November - January".to_string(),
            farmer: "Bekele Hunde".to_string(),
            certifications: strings(&["Organic", "Fair Trade"]),
            story: "Sourced from a cooperative of 450 small-holder farmers in the birthplace \
                    of coffee. These high-altitude beans develop complex flavors through slow \
                    maturation in cool mountain air."
                .to_string(),
            sustainability_score: 92,
            flavor_profile: strings(&["Blueberry", "Wine", "Citrus", "Floral"]),
            roast_date: NaiveDate::from_ymd_opt(2024, 1, 12),
            journey_days: 21,
        },
    ]
}
