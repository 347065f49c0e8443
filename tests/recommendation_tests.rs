use aura_lounge::models::mood::{Mood, MAX_MATCH_SCORE};
use aura_lounge::models::recommendation::{recommendation_catalog, CatalogItem};
use aura_lounge::services::recommendation_service::{rank, rank_by_tag};

fn candidate(id: &str, score: u8) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: format!("Blend {}", id),
        match_score: score,
        reasons: vec!["Because".to_string()],
        mood_enhancement: "Original enhancement".to_string(),
        origin: "Somewhere".to_string(),
        price: 5.0,
        taste_notes: vec!["Cocoa".to_string()],
    }
}

fn ids(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_every_mood_adds_delta_clamps_and_replaces_enhancement() {
    let catalog = vec![
        candidate("low", 10),
        candidate("high", 96),
        candidate("mid", 60),
    ];

    for mood in Mood::ALL {
        let adjustment = mood.adjustment();
        let ranked = rank(Some(mood), &catalog);

        assert_eq!(ranked.len(), catalog.len());
        for item in &ranked {
            let original = catalog.iter().find(|c| c.id == item.id).unwrap();
            let expected = (original.match_score + adjustment.score_delta).min(MAX_MATCH_SCORE);
            assert_eq!(item.match_score, expected, "{} under {}", item.id, mood);
            assert_eq!(item.mood_enhancement, adjustment.enhancement);
        }
        assert_eq!(ids(&ranked), vec!["high", "mid", "low"]);
    }
}

#[test]
fn test_rank_does_not_touch_the_catalog() {
    let catalog = recommendation_catalog();
    let before = catalog.clone();
    let _ = rank(Some(Mood::Calm), &catalog);
    assert_eq!(catalog, before);
}

#[test]
fn test_no_mood_is_a_stable_descending_sort() {
    let catalog = vec![
        candidate("a", 70),
        candidate("b", 85),
        candidate("c", 70),
        candidate("d", 85),
        candidate("e", 40),
    ];

    let ranked = rank(None, &catalog);
    assert_eq!(ids(&ranked), vec!["b", "d", "a", "c", "e"]);
    assert!(ranked
        .iter()
        .all(|i| i.mood_enhancement == "Original enhancement"));
}

#[test]
fn test_clamping_can_create_ties_that_keep_catalog_order() {
    let catalog = vec![candidate("x", 95), candidate("y", 97)];
    let ranked = rank(Some(Mood::Focused), &catalog);

    // both clamp to 98, so catalog order wins
    assert_eq!(ids(&ranked), vec!["x", "y"]);
    assert!(ranked.iter().all(|i| i.match_score == MAX_MATCH_SCORE));
}

#[test]
fn test_energized_on_house_catalog() {
    let ranked = rank_by_tag(Some("energized"), &recommendation_catalog());
    let scores: Vec<u8> = ranked.iter().map(|i| i.match_score).collect();
    assert_eq!(scores, vec![98, 92, 87]);
    assert_eq!(ranked[0].name, "Neural Blend Espresso");
}

#[test]
fn test_unrecognized_tags_behave_like_no_mood() {
    let catalog = recommendation_catalog();
    let baseline = rank(None, &catalog);

    for tag in ["", "sleepy", "calm!", "hungry", "ENERGIZED", "  focused", "Romantic"] {
        assert_eq!(rank_by_tag(Some(tag), &catalog), baseline, "tag {:?}", tag);
    }
}
