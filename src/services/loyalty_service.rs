use serde::Serialize;

use crate::models::loyalty::{loyalty_tiers, rewards, LoyaltyTier, MemberStats, Reward};

const POINTS_PER_FREE_DRINK: u32 = 100;

#[derive(Debug, Serialize, Clone)]
pub struct LoyaltySummary {
    pub member: MemberStats,
    pub tier_index: usize,
    pub current_tier: LoyaltyTier,
    pub next_tier: Option<LoyaltyTier>,
    pub points_to_next: Option<u32>,
    pub progress_percent: f64,
    pub free_drinks: u32,
    pub redeemable: Vec<Reward>,
}

pub struct LoyaltyService {
    tiers: Vec<LoyaltyTier>,
    rewards: Vec<Reward>,
}

impl LoyaltyService {
    pub fn new() -> Self {
        Self {
            tiers: loyalty_tiers(),
            rewards: rewards(),
        }
    }

    pub fn tiers(&self) -> &[LoyaltyTier] {
        &self.tiers
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Highest tier whose threshold the balance reaches.
    pub fn tier_for_points(&self, points: u32) -> (usize, &LoyaltyTier) {
        let index = self
            .tiers
            .iter()
            .rposition(|tier| tier.points_required <= points)
            .unwrap_or(0);
        (index, &self.tiers[index])
    }

    pub fn next_tier(&self, points: u32) -> Option<&LoyaltyTier> {
        let (index, _) = self.tier_for_points(points);
        self.tiers.get(index + 1)
    }

    pub fn points_to_next(&self, points: u32) -> Option<u32> {
        self.next_tier(points)
            .map(|next| next.points_required.saturating_sub(points))
    }

    /// Percent of the way from the current tier to the next; 100 at the top tier.
    pub fn progress_to_next(&self, points: u32) -> f64 {
        let (_, current) = self.tier_for_points(points);
        match self.next_tier(points) {
            Some(next) => {
                let span = f64::from(next.points_required - current.points_required);
                f64::from(points - current.points_required) / span * 100.0
            }
            None => 100.0,
        }
    }

    pub fn free_drinks(&self, points: u32) -> u32 {
        points / POINTS_PER_FREE_DRINK
    }

    pub fn redeemable_rewards(&self, points: u32) -> Vec<Reward> {
        self.rewards
            .iter()
            .filter(|reward| reward.points_cost <= points)
            .cloned()
            .collect()
    }

    pub fn summary(&self, member: MemberStats) -> LoyaltySummary {
        let points = member.points;
        let (tier_index, current_tier) = self.tier_for_points(points);

        LoyaltySummary {
            tier_index,
            current_tier: current_tier.clone(),
            next_tier: self.next_tier(points).cloned(),
            points_to_next: self.points_to_next(points),
            progress_percent: self.progress_to_next(points),
            free_drinks: self.free_drinks(points),
            redeemable: self.redeemable_rewards(points),
            member,
        }
    }
}

impl Default for LoyaltyService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_member_summary() {
        let service = LoyaltyService::new();
        let summary = service.summary(MemberStats::demo());

        assert_eq!(summary.tier_index, 1);
        assert_eq!(summary.current_tier.name, "Aura Enthusiast");
        assert_eq!(summary.next_tier.as_ref().map(|t| t.name.as_str()), Some("Mood Master"));
        assert_eq!(summary.points_to_next, Some(250));
        assert!((summary.progress_percent - 75.0).abs() < 1e-9);
        assert_eq!(summary.free_drinks, 12);
        assert_eq!(summary.redeemable.len(), 3);
    }

    #[test]
    fn test_tier_boundaries() {
        let service = LoyaltyService::new();
        assert_eq!(service.tier_for_points(0).1.name, "Coffee Explorer");
        assert_eq!(service.tier_for_points(499).1.name, "Coffee Explorer");
        assert_eq!(service.tier_for_points(500).1.name, "Aura Enthusiast");
        assert_eq!(service.tier_for_points(3000).1.name, "Aura Elite");
    }

    #[test]
    fn test_top_tier_has_no_next() {
        let service = LoyaltyService::new();
        assert!(service.next_tier(5000).is_none());
        assert_eq!(service.points_to_next(5000), None);
        assert_eq!(service.progress_to_next(5000), 100.0);
    }

    #[test]
    fn test_redeemable_rewards() {
        let service = LoyaltyService::new();
        let names: Vec<String> = service
            .redeemable_rewards(600)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Free Coffee", "Masterclass"]);
        assert!(service.redeemable_rewards(50).is_empty());
    }
}
