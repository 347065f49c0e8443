use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    menu::{signature_menu, CoffeeItem},
    origin::{coffee_origins, CoffeeOrigin},
    recommendation::{recommendation_catalog, CatalogItem},
    room::{mood_rooms, MoodRoom},
    table::{lounge_tables, Table},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

/// A product that can be placed in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Catalog store trait for read-only lounge data
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn menu(&self) -> Vec<CoffeeItem>;
    async fn find_menu_item(&self, id: &str) -> Result<CoffeeItem, StoreError>;
    async fn recommendation_candidates(&self) -> Vec<CatalogItem>;
    /// Look up anything orderable: menu items first, then recommendation candidates.
    async fn find_product(&self, id: &str) -> Result<Product, StoreError>;
    async fn tables(&self) -> Vec<Table>;
    async fn available_tables(&self) -> Vec<Table>;
    async fn find_table(&self, number: &str) -> Result<Table, StoreError>;
    async fn rooms(&self) -> Vec<MoodRoom>;
    async fn origin(&self, id: &str) -> Result<CoffeeOrigin, StoreError>;
}

/// In-memory implementation of CatalogStore over the fixed lounge tables
pub struct InMemoryCatalogStore {
    menu: Vec<CoffeeItem>,
    candidates: Vec<CatalogItem>,
    tables: Vec<Table>,
    rooms: Vec<MoodRoom>,
    origins: Vec<CoffeeOrigin>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            menu: signature_menu(),
            candidates: recommendation_catalog(),
            tables: lounge_tables(),
            rooms: mood_rooms(),
            origins: coffee_origins(),
        }
    }

    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = tables;
        self
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn menu(&self) -> Vec<CoffeeItem> {
        self.menu.clone()
    }

    async fn find_menu_item(&self, id: &str) -> Result<CoffeeItem, StoreError> {
        self.menu
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "Menu item",
                id: id.to_string(),
            })
    }

    async fn recommendation_candidates(&self) -> Vec<CatalogItem> {
        self.candidates.clone()
    }

    async fn find_product(&self, id: &str) -> Result<Product, StoreError> {
        if let Some(item) = self.menu.iter().find(|item| item.id == id) {
            return Ok(Product {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
            });
        }

        self.candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .map(|candidate| Product {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                price: candidate.price,
            })
            .ok_or_else(|| StoreError::NotFound {
                kind: "Product",
                id: id.to_string(),
            })
    }

    async fn tables(&self) -> Vec<Table> {
        self.tables.clone()
    }

    async fn available_tables(&self) -> Vec<Table> {
        self.tables.iter().filter(|t| t.available).cloned().collect()
    }

    async fn find_table(&self, number: &str) -> Result<Table, StoreError> {
        self.tables
            .iter()
            .find(|t| t.number.eq_ignore_ascii_case(number))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "Table",
                id: number.to_string(),
            })
    }

    async fn rooms(&self) -> Vec<MoodRoom> {
        self.rooms.clone()
    }

    async fn origin(&self, id: &str) -> Result<CoffeeOrigin, StoreError> {
        self.origins
            .iter()
            .find(|origin| origin.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "Origin story",
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_product_covers_menu_and_candidates() {
        let store = InMemoryCatalogStore::new();

        let menu_product = store.find_product("passion-pour").await.unwrap();
        assert_eq!(menu_product.name, "Passion Pour");
        assert_eq!(menu_product.price, 8.00);

        let candidate = store.find_product("ai-3").await.unwrap();
        assert_eq!(candidate.name, "Predictive Cold Brew");

        let missing = store.find_product("espresso-tonic").await;
        assert!(matches!(missing, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_available_tables() {
        let store = InMemoryCatalogStore::new();
        let available = store.available_tables().await;
        assert_eq!(store.tables().await.len(), 8);
        assert_eq!(available.len(), 6);
        assert!(available.iter().all(|t| t.available));
    }

    #[tokio::test]
    async fn test_find_table_is_case_insensitive() {
        let store = InMemoryCatalogStore::new();
        assert_eq!(store.find_table("b2").await.unwrap().section, "Rhythm Lounge");
        assert!(store.find_table("Z9").await.is_err());
    }
}
