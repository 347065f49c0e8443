use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    models::{
        order::{OrderConfirmation, PaymentMethod, ESTIMATED_WAIT},
        origin::{CoffeeOrigin, DEFAULT_ORIGIN_ID},
        table::Table,
    },
    services::cart_service::Cart,
    store::{CatalogStore, StoreError},
};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("{action} is already in progress")]
    Busy { action: &'static str },

    #[error("No table is available for check-in")]
    NoTableAvailable,

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

/// A fixed-delay stand-in for a device or backend call.
///
/// Only one run may be in flight at a time; a second trigger while busy is
/// rejected instead of queued.
pub struct Simulator {
    action: &'static str,
    delay: Duration,
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Simulator {
    pub fn new(action: &'static str, delay: Duration) -> Self {
        Self {
            action,
            delay,
            busy: AtomicBool::new(false),
        }
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Wait out the delay, resolve `work`, then hand the result to `on_complete` once.
    pub async fn run<T, W, C>(&self, work: W, on_complete: C) -> Result<T, SimulationError>
    where
        W: Future<Output = Result<T, SimulationError>>,
        C: FnOnce(&T),
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("{} triggered while already running", self.action);
            return Err(SimulationError::Busy {
                action: self.action,
            });
        }
        let _guard = BusyGuard(&self.busy);

        debug!("{} started, completing in {:?}", self.action, self.delay);
        tokio::time::sleep(self.delay).await;

        let result = work.await?;
        on_complete(&result);
        debug!("{} completed", self.action);
        Ok(result)
    }
}

/// Simulated camera scan of a coffee card.
pub struct ArScanner {
    simulator: Simulator,
    store: Arc<dyn CatalogStore>,
}

impl ArScanner {
    pub fn new(store: Arc<dyn CatalogStore>, delay: Duration) -> Self {
        Self {
            simulator: Simulator::new("AR scan", delay),
            store,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.simulator.is_busy()
    }

    /// Reveal the origin story for `coffee_id`. Cards without a story show the default blend.
    pub async fn scan<C>(
        &self,
        coffee_id: Option<&str>,
        on_complete: C,
    ) -> Result<CoffeeOrigin, SimulationError>
    where
        C: FnOnce(&CoffeeOrigin),
    {
        let requested = coffee_id.unwrap_or(DEFAULT_ORIGIN_ID);
        let store = &self.store;

        self.simulator
            .run(
                async move {
                    let origin = match store.origin(requested).await {
                        Ok(origin) => origin,
                        Err(_) => {
                            info!("No origin story for '{}', showing {}", requested, DEFAULT_ORIGIN_ID);
                            store.origin(DEFAULT_ORIGIN_ID).await?
                        }
                    };
                    Ok::<_, SimulationError>(origin)
                },
                on_complete,
            )
            .await
    }
}

/// Simulated NFC tag read on a lounge table.
pub struct NfcReader {
    simulator: Simulator,
    store: Arc<dyn CatalogStore>,
}

impl NfcReader {
    pub fn new(store: Arc<dyn CatalogStore>, delay: Duration) -> Self {
        Self {
            simulator: Simulator::new("NFC scan", delay),
            store,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.simulator.is_busy()
    }

    /// Detect a random available table.
    pub async fn scan<C>(&self, on_complete: C) -> Result<Table, SimulationError>
    where
        C: FnOnce(&Table),
    {
        let store = &self.store;

        self.simulator
            .run(
                async move {
                    let available = store.available_tables().await;
                    let table = available
                        .choose(&mut rand::thread_rng())
                        .cloned()
                        .ok_or(SimulationError::NoTableAvailable)?;
                    info!("NFC tag detected: table {} in {}", table.number, table.section);
                    Ok::<_, SimulationError>(table)
                },
                on_complete,
            )
            .await
    }
}

/// Mock checkout. Always succeeds for a non-empty cart.
pub struct PaymentProcessor {
    simulator: Simulator,
}

impl PaymentProcessor {
    pub fn new(delay: Duration) -> Self {
        Self {
            simulator: Simulator::new("Payment", delay),
        }
    }

    pub fn is_processing(&self) -> bool {
        self.simulator.is_busy()
    }

    pub async fn process<C>(
        &self,
        cart: &Cart,
        method: PaymentMethod,
        table: Option<String>,
        on_complete: C,
    ) -> Result<OrderConfirmation, SimulationError>
    where
        C: FnOnce(&OrderConfirmation),
    {
        if cart.is_empty() {
            return Err(SimulationError::EmptyCart);
        }

        let lines = cart.lines().to_vec();
        let total = cart.total();
        info!("Processing {} payment of {:.2}", method, total);

        self.simulator
            .run(
                async move {
                    Ok(OrderConfirmation {
                        id: Uuid::new_v4(),
                        placed_at: Utc::now(),
                        lines,
                        total,
                        payment_method: method,
                        table,
                        estimated_wait: ESTIMATED_WAIT.to_string(),
                    })
                },
                on_complete,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::CartLineItem;
    use crate::store::InMemoryCatalogStore;

    const FAST: Duration = Duration::from_millis(5);

    fn store() -> Arc<dyn CatalogStore> {
        Arc::new(InMemoryCatalogStore::new())
    }

    #[tokio::test]
    async fn test_run_calls_completion_once() {
        let simulator = Simulator::new("Test", FAST);
        let mut calls = 0;

        let value = simulator
            .run(async { Ok(42) }, |v| {
                assert_eq!(*v, 42);
                calls += 1;
            })
            .await
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(calls, 1);
        assert!(!simulator.is_busy());
    }

    #[tokio::test]
    async fn test_second_trigger_while_busy_is_rejected() {
        let simulator = Simulator::new("Test", Duration::from_millis(100));

        let (first, second) = tokio::join!(
            simulator.run(async { Ok("first") }, |_| {}),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                simulator.run(async { Ok("second") }, |_| {}).await
            }
        );

        assert_eq!(first.unwrap(), "first");
        assert!(matches!(second, Err(SimulationError::Busy { .. })));

        // Accepts again once the first run is done
        let third = simulator.run(async { Ok("third") }, |_| {}).await;
        assert_eq!(third.unwrap(), "third");
    }

    #[tokio::test]
    async fn test_busy_flag_resets_after_failed_work() {
        let simulator = Simulator::new("Test", FAST);
        let result: Result<(), _> = simulator
            .run(async { Err(SimulationError::NoTableAvailable) }, |_| {})
            .await;
        assert!(result.is_err());
        assert!(!simulator.is_busy());
    }

    #[tokio::test]
    async fn test_ar_scan_defaults_and_falls_back() {
        let scanner = ArScanner::new(store(), FAST);

        let default = scanner.scan(None, |_| {}).await.unwrap();
        assert_eq!(default.id, DEFAULT_ORIGIN_ID);

        let lightning = scanner.scan(Some("lightning-roast"), |_| {}).await.unwrap();
        assert_eq!(lightning.farmer, "Bekele Hunde");

        let unknown = scanner.scan(Some("focus-flow"), |_| {}).await.unwrap();
        assert_eq!(unknown.id, DEFAULT_ORIGIN_ID);
    }

    #[tokio::test]
    async fn test_nfc_scan_picks_available_table() {
        let reader = NfcReader::new(store(), FAST);
        for _ in 0..10 {
            let table = reader.scan(|_| {}).await.unwrap();
            assert!(table.available);
        }
    }

    #[tokio::test]
    async fn test_nfc_scan_with_no_free_tables() {
        let tables = crate::models::table::lounge_tables()
            .into_iter()
            .map(|mut t| {
                t.available = false;
                t
            })
            .collect();
        let store: Arc<dyn CatalogStore> =
            Arc::new(InMemoryCatalogStore::new().with_tables(tables));
        let reader = NfcReader::new(store, FAST);

        let result = reader.scan(|_| {}).await;
        assert!(matches!(result, Err(SimulationError::NoTableAvailable)));
    }

    #[tokio::test]
    async fn test_payment_rejects_empty_cart() {
        let processor = PaymentProcessor::new(FAST);
        let result = processor
            .process(&Cart::new(), PaymentMethod::Card, None, |_| {})
            .await;
        assert!(matches!(result, Err(SimulationError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_payment_confirms_order() {
        let processor = PaymentProcessor::new(FAST);
        let mut cart = Cart::new();
        cart.add_line(CartLineItem::new("focus-flow", "Focus Flow", 6.75));

        let mut confirmed = None;
        let confirmation = processor
            .process(&cart, PaymentMethod::Points, Some("B1".to_string()), |c| {
                confirmed = Some(c.id)
            })
            .await
            .unwrap();

        assert_eq!(confirmed, Some(confirmation.id));
        assert_eq!(confirmation.table.as_deref(), Some("B1"));
        assert_eq!(confirmation.estimated_wait, ESTIMATED_WAIT);
        assert!((confirmation.total - 7.75).abs() < 1e-9);
    }
}
