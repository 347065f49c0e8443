use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::{
    models::{
        cart::CartLineItem,
        mood::{Mood, MAX_MATCH_SCORE},
        recommendation::{CatalogItem, TasteProfile},
    },
    services::simulation::{SimulationError, Simulator},
    store::CatalogStore,
};

/// Rank candidates for an optional mood.
///
/// Without a mood the items keep their scores and are sorted descending.
/// With a mood every score gets the mood's delta (capped at
/// [`MAX_MATCH_SCORE`]) and every enhancement is replaced by the mood's.
/// The sort is stable, so equal scores keep catalog order.
pub fn rank(mood: Option<Mood>, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
    let mut ranked = catalog.to_vec();

    if let Some(mood) = mood {
        let adjustment = mood.adjustment();
        for item in ranked.iter_mut() {
            item.match_score = item
                .match_score
                .saturating_add(adjustment.score_delta)
                .min(MAX_MATCH_SCORE);
            item.mood_enhancement = adjustment.enhancement.to_string();
        }
    }

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

/// Same as [`rank`], taking a raw tag. Anything but an exact lowercase tag ranks as if no mood was set.
pub fn rank_by_tag(tag: Option<&str>, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
    rank(tag.and_then(Mood::from_tag), catalog)
}

pub struct RecommendationService {
    store: Arc<dyn CatalogStore>,
    analysis: Simulator,
    profile: TasteProfile,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn CatalogStore>, analysis_delay: Duration) -> Self {
        Self {
            store,
            analysis: Simulator::new("AI analysis", analysis_delay),
            profile: TasteProfile::demo(),
        }
    }

    pub fn profile(&self) -> &TasteProfile {
        &self.profile
    }

    pub fn is_analyzing(&self) -> bool {
        self.analysis.is_busy()
    }

    /// Simulated AI pass: waits the analysis delay, then ranks the catalog.
    pub async fn recommend<C>(
        &self,
        mood: Option<Mood>,
        on_complete: C,
    ) -> Result<Vec<CatalogItem>, SimulationError>
    where
        C: FnOnce(&Vec<CatalogItem>),
    {
        info!(
            "Analyzing taste profile for mood: {}",
            mood.map(|m| m.tag()).unwrap_or("none")
        );
        let store = &self.store;

        let ranked = self
            .analysis
            .run(
                async move {
                    let catalog = store.recommendation_candidates().await;
                    Ok::<_, SimulationError>(rank(mood, &catalog))
                },
                on_complete,
            )
            .await?;

        if let Some(best) = ranked.first() {
            debug!("Best match: {} at {}%", best.name, best.match_score);
        }
        Ok(ranked)
    }

    /// Turn a picked recommendation into a single default-configured cart line.
    pub fn to_line_item(&self, candidate: &CatalogItem) -> CartLineItem {
        CartLineItem::new(&candidate.id, &candidate.name, candidate.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::recommendation_catalog;
    use crate::store::InMemoryCatalogStore;

    fn scores(items: &[CatalogItem]) -> Vec<u8> {
        items.iter().map(|i| i.match_score).collect()
    }

    fn with_score(id: &str, score: u8) -> CatalogItem {
        let mut item = recommendation_catalog()[0].clone();
        item.id = id.to_string();
        item.match_score = score;
        item
    }

    #[test]
    fn test_energized_example() {
        let ranked = rank(Some(Mood::Energized), &recommendation_catalog());
        assert_eq!(scores(&ranked), vec![98, 92, 87]);
        assert!(ranked
            .iter()
            .all(|i| i.mood_enhancement == "Boosts energy and motivation"));
    }

    #[test]
    fn test_no_mood_sorts_without_mutation() {
        let catalog = vec![with_score("a", 50), with_score("b", 90), with_score("c", 70)];
        let ranked = rank(None, &catalog);

        let ids: Vec<&str> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(scores(&ranked), vec![90, 70, 50]);
        assert_eq!(ranked[0].mood_enhancement, catalog[0].mood_enhancement);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![with_score("first", 80), with_score("second", 80), with_score("third", 95)];
        let ranked = rank(Some(Mood::Calm), &catalog);

        let ids: Vec<&str> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_unknown_tag_matches_no_mood() {
        let catalog = recommendation_catalog();
        assert_eq!(rank_by_tag(Some("grumpy"), &catalog), rank(None, &catalog));
        assert_eq!(rank_by_tag(None, &catalog), rank(None, &catalog));
        assert_eq!(rank_by_tag(Some("Focused"), &catalog), rank(None, &catalog));
        assert_eq!(
            rank_by_tag(Some("focused"), &catalog),
            rank(Some(Mood::Focused), &catalog)
        );
    }

    #[tokio::test]
    async fn test_recommend_waits_then_ranks() {
        let service = RecommendationService::new(
            Arc::new(InMemoryCatalogStore::new()),
            Duration::from_millis(5),
        );

        let mut seen = 0;
        let ranked = service
            .recommend(Some(Mood::Romantic), |items| seen = items.len())
            .await
            .unwrap();

        assert_eq!(seen, 3);
        assert_eq!(ranked[0].name, "Neural Blend Espresso");
        assert_eq!(ranked[0].mood_enhancement, "Creates warm, intimate feelings");
        assert!(!service.is_analyzing());
    }

    #[test]
    fn test_to_line_item() {
        let service = RecommendationService::new(
            Arc::new(InMemoryCatalogStore::new()),
            Duration::from_millis(5),
        );
        let candidate = &recommendation_catalog()[2];
        let line = service.to_line_item(candidate);

        assert_eq!(line.product_id, "ai-3");
        assert_eq!(line.quantity, 1);
        assert!((line.unit_price() - 6.50).abs() < 1e-9);
    }
}
