use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::CartLineItem;

pub const ESTIMATED_WAIT: &str = "8-12 minutes";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Points,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Card
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Points => write!(f, "points"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    None,
    Preparing,
    Ready,
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::None
    }
}

impl OrderStatus {
    /// Next step of the delivery flow. `Delivered` is terminal.
    pub fn advance(self) -> Self {
        match self {
            OrderStatus::None => OrderStatus::Preparing,
            OrderStatus::Preparing => OrderStatus::Ready,
            OrderStatus::Ready | OrderStatus::Delivered => OrderStatus::Delivered,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            OrderStatus::None => None,
            OrderStatus::Preparing => Some("Your order is being prepared..."),
            OrderStatus::Ready => {
                Some("Your order is ready! Our staff is bringing it to your table.")
            }
            OrderStatus::Delivered => Some("Order delivered! Enjoy your coffee experience."),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::None => write!(f, "none"),
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct OrderConfirmation {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<CartLineItem>,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub table: Option<String>,
    pub estimated_wait: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_advances_and_stops_at_delivered() {
        let mut status = OrderStatus::default();
        let mut seen = vec![status];
        for _ in 0..4 {
            status = status.advance();
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                OrderStatus::None,
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::Delivered,
                OrderStatus::Delivered,
            ]
        );
        assert!(OrderStatus::None.message().is_none());
    }
}
