use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LoyaltyTier {
    pub name: String,
    pub benefits: Vec<String>,
    pub points_required: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Reward {
    pub name: String,
    pub points_cost: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MemberStats {
    pub name: String,
    pub points: u32,
    pub total_visits: u32,
    pub favorite_mood: String,
    pub lifetime_spent: f64,
}

impl MemberStats {
    pub fn demo() -> Self {
        Self {
            name: "Sarah Chen".to_string(),
            points: 1250,
            total_visits: 47,
            favorite_mood: "Focused".to_string(),
            lifetime_spent: 340.50,
        }
    }
}

fn tier(name: &str, points_required: u32, benefits: &[&str]) -> LoyaltyTier {
    LoyaltyTier {
        name: name.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        points_required,
    }
}

/// Tiers ordered by ascending threshold.
pub fn loyalty_tiers() -> Vec<LoyaltyTier> {
    vec![
        tier(
            "Coffee Explorer",
            0,
            &["Basic mood recommendations", "5% discount", "Birthday surprise"],
        ),
        tier(
            "Aura Enthusiast",
            500,
            &["Priority seating", "10% discount", "Exclusive blends", "Free size upgrades"],
        ),
        tier(
            "Mood Master",
            1500,
            &["Room reservations", "15% discount", "Masterclass access", "Custom blends"],
        ),
        tier(
            "Aura Elite",
            3000,
            &["Concierge service", "20% discount", "Private events", "NFT collectibles"],
        ),
    ]
}

pub fn rewards() -> Vec<Reward> {
    [("Free Coffee", 100), ("Masterclass", 500), ("NFT Collectible", 1000)]
        .into_iter()
        .map(|(name, points_cost)| Reward {
            name: name.to_string(),
            points_cost,
        })
        .collect()
}
