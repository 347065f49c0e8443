use tracing::info;
use uuid::Uuid;

use crate::{
    models::{
        cart::CartLineItem,
        mood::Mood,
        order::{OrderConfirmation, OrderStatus},
        table::Table,
    },
    services::cart_service::Cart,
};

/// Everything a guest has chosen during one visit. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct SessionState {
    selected_mood: Option<Mood>,
    cart: Cart,
    selected_table: Option<String>,
    order_status: OrderStatus,
    last_order: Option<OrderConfirmation>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.selected_mood
    }

    pub fn select_mood(&mut self, mood: Mood) {
        info!("{} mood selected", mood.display_name());
        self.selected_mood = Some(mood);
    }

    pub fn clear_mood(&mut self) {
        self.selected_mood = None;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Returns the new line id, or `None` when the line had quantity zero.
    pub fn add_to_cart(&mut self, line: CartLineItem) -> Option<Uuid> {
        let name = line.name.clone();
        let added = self.cart.add_line(line).map(|line| line.id);
        if added.is_some() {
            info!("{} has been added to the cart", name);
        }
        added
    }

    pub fn selected_table(&self) -> Option<&str> {
        self.selected_table.as_deref()
    }

    pub fn select_table(&mut self, table: &Table) {
        info!("Seated at table {} in {}", table.number, table.section);
        self.selected_table = Some(table.number.clone());
    }

    pub fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    pub fn last_order(&self) -> Option<&OrderConfirmation> {
        self.last_order.as_ref()
    }

    /// Record a paid order: empties the cart and starts preparation.
    pub fn complete_order(&mut self, confirmation: OrderConfirmation) {
        info!("Order {} confirmed", confirmation.id);
        self.cart.clear();
        self.order_status = OrderStatus::Preparing;
        self.last_order = Some(confirmation);
    }

    pub fn advance_order(&mut self) -> OrderStatus {
        if self.order_status != OrderStatus::None {
            self.order_status = self.order_status.advance();
        }
        self.order_status
    }

    /// Back to the landing screen with a clean slate.
    pub fn go_home(&mut self) {
        self.selected_mood = None;
        self.cart.clear();
        self.selected_table = None;
        self.order_status = OrderStatus::None;
        self.last_order = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{PaymentMethod, ESTIMATED_WAIT};
    use crate::models::table::lounge_tables;
    use chrono::Utc;

    fn confirmation(session: &SessionState) -> OrderConfirmation {
        OrderConfirmation {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            lines: session.cart().lines().to_vec(),
            total: session.cart().total(),
            payment_method: PaymentMethod::Card,
            table: session.selected_table().map(str::to_string),
            estimated_wait: ESTIMATED_WAIT.to_string(),
        }
    }

    #[test]
    fn test_complete_order_clears_cart() {
        let mut session = SessionState::new();
        session.add_to_cart(CartLineItem::new("focus-flow", "Focus Flow", 6.75));
        let order = confirmation(&session);

        session.complete_order(order);
        assert!(session.cart().is_empty());
        assert_eq!(session.order_status(), OrderStatus::Preparing);
        assert_eq!(session.advance_order(), OrderStatus::Ready);
        assert_eq!(session.advance_order(), OrderStatus::Delivered);
        assert!(session.last_order().is_some());
    }

    #[test]
    fn test_add_to_cart_skips_zero_quantity() {
        let mut session = SessionState::new();
        let mut empty = CartLineItem::new("focus-flow", "Focus Flow", 6.75);
        empty.quantity = 0;

        assert_eq!(session.add_to_cart(empty), None);
        assert!(session.cart().is_empty());
        assert!(session
            .add_to_cart(CartLineItem::new("focus-flow", "Focus Flow", 6.75))
            .is_some());
    }

    #[test]
    fn test_reading_status_does_not_advance() {
        let mut session = SessionState::new();
        session.add_to_cart(CartLineItem::new("focus-flow", "Focus Flow", 6.75));
        let order = confirmation(&session);
        session.complete_order(order);

        for _ in 0..3 {
            assert_eq!(session.order_status(), OrderStatus::Preparing);
        }
        assert_eq!(session.advance_order(), OrderStatus::Ready);
        assert_eq!(session.order_status(), OrderStatus::Ready);
    }

    #[test]
    fn test_advance_without_order_stays_none() {
        let mut session = SessionState::new();
        assert_eq!(session.advance_order(), OrderStatus::None);
    }

    #[test]
    fn test_go_home_resets_everything() {
        let mut session = SessionState::new();
        session.select_mood(Mood::Creative);
        session.select_table(&lounge_tables()[2]);
        session.add_to_cart(CartLineItem::new("passion-pour", "Passion Pour", 8.0));
        let order = confirmation(&session);
        session.complete_order(order);
        session.add_to_cart(CartLineItem::new("passion-pour", "Passion Pour", 8.0));

        session.go_home();

        assert_eq!(session.selected_mood(), None);
        assert_eq!(session.selected_table(), None);
        assert!(session.cart().is_empty());
        assert_eq!(session.order_status(), OrderStatus::None);
        assert!(session.last_order().is_none());
    }
}
