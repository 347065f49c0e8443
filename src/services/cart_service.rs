use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::cart::{AddToCartRequest, CartLineItem},
    store::{CatalogStore, StoreError},
};

#[derive(Error, Debug)]
pub enum CartServiceError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

/// Grand total of a set of lines. No rounding is applied.
pub fn compute_total(lines: &[CartLineItem]) -> f64 {
    lines.iter().map(CartLineItem::line_total).sum()
}

/// Client-side shopping cart. Lines never sit at quantity zero.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. A line with quantity zero is dropped and `None` returned.
    pub fn add_line(&mut self, line: CartLineItem) -> Option<&CartLineItem> {
        if line.quantity == 0 {
            warn!("Ignoring {} with quantity 0", line.name);
            return None;
        }
        debug!("Adding {} x{} to cart", line.name, line.quantity);
        self.lines.push(line);
        self.lines.last()
    }

    pub fn increment(&mut self, id: &Uuid) {
        self.update_quantity(id, 1);
    }

    pub fn decrement(&mut self, id: &Uuid) {
        self.update_quantity(id, -1);
    }

    /// Apply `change` to a line's quantity, floored at zero; zero removes the line.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &Uuid, change: i64) {
        let Some(index) = self.lines.iter().position(|line| line.id == *id) else {
            return;
        };

        let new_quantity = (i64::from(self.lines[index].quantity) + change).max(0);
        if new_quantity == 0 {
            let removed = self.lines.remove(index);
            debug!("Removed {} from cart", removed.name);
        } else {
            self.lines[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn remove(&mut self, id: &Uuid) {
        self.lines.retain(|line| line.id != *id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn get(&self, id: &Uuid) -> Option<&CartLineItem> {
        self.lines.iter().find(|line| line.id == *id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of drinks across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        compute_total(&self.lines)
    }
}

pub struct CartService {
    store: Arc<dyn CatalogStore>,
}

impl CartService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Validate a request and resolve its product into a priced cart line.
    pub async fn build_line(
        &self,
        request: AddToCartRequest,
    ) -> Result<CartLineItem, CartServiceError> {
        request
            .validate()
            .map_err(|e| CartServiceError::ValidationError {
                message: format!("Cart request validation failed: {}", e),
            })?;

        let product = self.store.find_product(&request.product_id).await?;

        let mut line = CartLineItem::new(&product.id, &product.name, product.price);
        line.quantity = request.quantity;
        line.size = request.size;
        line.milk = request.milk;
        line.temperature = request.temperature;
        line.extras = request.extras;

        info!(
            "Built cart line for {} at {:.2} each",
            line.name,
            line.unit_price()
        );
        Ok(line)
    }

    pub async fn add_to_cart(
        &self,
        cart: &mut Cart,
        request: AddToCartRequest,
    ) -> Result<CartLineItem, CartServiceError> {
        let line = self.build_line(request).await?;
        cart.add_line(line)
            .cloned()
            .ok_or_else(|| CartServiceError::ValidationError {
                message: "Quantity must be at least 1".to_string(),
            })
    }
}
