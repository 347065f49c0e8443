use std::sync::Arc;
use std::time::Duration;

use tokio_test::assert_ok;

use aura_lounge::models::cart::{AddToCartRequest, Size};
use aura_lounge::models::mood::Mood;
use aura_lounge::models::order::{OrderStatus, PaymentMethod};
use aura_lounge::services::{
    ArScanner, CartService, NfcReader, PaymentProcessor, RecommendationService, SimulationError,
};
use aura_lounge::session::SessionState;
use aura_lounge::store::{CatalogStore, InMemoryCatalogStore};

const FAST: Duration = Duration::from_millis(5);

fn store() -> Arc<dyn CatalogStore> {
    Arc::new(InMemoryCatalogStore::new())
}

#[tokio::test]
async fn test_full_visit_from_mood_to_delivery() {
    let store = store();
    let recommender = RecommendationService::new(store.clone(), FAST);
    let carts = CartService::new(store.clone());
    let nfc = NfcReader::new(store.clone(), FAST);
    let payments = PaymentProcessor::new(FAST);
    let mut session = SessionState::new();

    session.select_mood(Mood::Energized);

    let ranked = recommender
        .recommend(session.selected_mood(), |_| {})
        .await
        .unwrap();
    session.add_to_cart(recommender.to_line_item(&ranked[0]));

    let line = carts
        .build_line(
            AddToCartRequest::new("lightning-roast")
                .with_size(Size::Large)
                .with_extra("Extra Shot"),
        )
        .await
        .unwrap();
    session.add_to_cart(line);
    assert_eq!(session.cart().len(), 2);

    let table = nfc.scan(|_| {}).await.unwrap();
    assert!(table.available);
    session.select_table(&table);

    let expected_total = session.cart().total();
    let order = payments
        .process(
            session.cart(),
            PaymentMethod::Card,
            session.selected_table().map(str::to_string),
            |_| {},
        )
        .await
        .unwrap();
    assert!((order.total - expected_total).abs() < 1e-9);
    assert_eq!(order.table.as_deref(), Some(table.number.as_str()));

    session.complete_order(order);
    assert!(session.cart().is_empty());
    assert_eq!(session.order_status(), OrderStatus::Preparing);
    assert_eq!(session.advance_order(), OrderStatus::Ready);
    assert_eq!(session.advance_order(), OrderStatus::Delivered);
    assert_eq!(session.advance_order(), OrderStatus::Delivered);

    session.go_home();
    assert_eq!(session.selected_mood(), None);
    assert_eq!(session.selected_table(), None);
    assert_eq!(session.order_status(), OrderStatus::None);
    assert!(session.last_order().is_none());
}

#[tokio::test]
async fn test_checkout_requires_items() {
    let payments = PaymentProcessor::new(FAST);
    let session = SessionState::new();

    let result = payments
        .process(session.cart(), PaymentMethod::Points, None, |_| {})
        .await;
    assert!(matches!(result, Err(SimulationError::EmptyCart)));
    assert!(!payments.is_processing());
}

#[tokio::test]
async fn test_ar_scan_falls_back_to_house_story() {
    let scanner = ArScanner::new(store(), FAST);

    let known = assert_ok!(scanner.scan(Some("serenity-blend"), |_| {}).await);
    let unknown = assert_ok!(scanner.scan(Some("mystery-bean"), |_| {}).await);
    assert_eq!(known.id, unknown.id);
}

#[tokio::test]
async fn test_concurrent_scan_is_rejected() {
    let scanner = ArScanner::new(store(), Duration::from_millis(50));

    let (first, second) = tokio::join!(scanner.scan(None, |_| {}), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        scanner.scan(None, |_| {}).await
    });

    assert!(first.is_ok());
    assert!(matches!(second, Err(SimulationError::Busy { .. })));
    assert!(!scanner.is_scanning());
}

#[tokio::test]
async fn test_completion_callback_fires_once_with_result() {
    let recommender = RecommendationService::new(store(), FAST);
    let mut seen = Vec::new();

    let ranked = recommender
        .recommend(Some(Mood::Calm), |items| {
            seen.extend(items.iter().map(|i| i.id.clone()))
        })
        .await
        .unwrap();

    let ids: Vec<String> = ranked.into_iter().map(|i| i.id).collect();
    assert_eq!(seen, ids);
}
