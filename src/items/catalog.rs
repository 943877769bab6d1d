//! Item catalog and price oracle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static definition of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: i32,
    pub name: String,

    /// Base store price, the input to alchemy value
    pub store_price: i64,
}

/// Read-only item lookups supplied by the host
pub trait ItemCatalog {
    /// Collapse a variant (noted, charged, placeholder...) onto its canonical id
    fn canonicalize(&self, item_id: i32) -> i32;

    /// Definition for an item id, `None` if unknown
    fn definition(&self, item_id: i32) -> Option<ItemDefinition>;

    /// Current market price per unit of a canonical item
    ///
    /// May be stale or estimated. Unknown items price at 0.
    fn market_price(&self, canonical_id: i32) -> i64;
}

/// One catalog row as stored in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,

    #[serde(default)]
    pub store_price: i64,

    #[serde(default)]
    pub market_price: i64,
}

/// In-memory catalog keyed by item id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    items: HashMap<i32, CatalogItem>,

    /// Variant id -> canonical id
    #[serde(default)]
    variants: HashMap<i32, i32>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an item
    pub fn with_item(
        mut self,
        id: i32,
        name: impl Into<String>,
        store_price: i64,
        market_price: i64,
    ) -> Self {
        self.items.insert(
            id,
            CatalogItem {
                name: name.into(),
                store_price,
                market_price,
            },
        );
        self
    }

    /// Register `variant_id` as another form of `canonical_id`
    pub fn with_variant(mut self, variant_id: i32, canonical_id: i32) -> Self {
        self.variants.insert(variant_id, canonical_id);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for StaticCatalog {
    fn canonicalize(&self, item_id: i32) -> i32 {
        self.variants.get(&item_id).copied().unwrap_or(item_id)
    }

    fn definition(&self, item_id: i32) -> Option<ItemDefinition> {
        self.items.get(&item_id).map(|item| ItemDefinition {
            id: item_id,
            name: item.name.clone(),
            store_price: item.store_price,
        })
    }

    fn market_price(&self, canonical_id: i32) -> i64 {
        self.items.get(&canonical_id).map_or(0, |item| item.market_price)
    }
}
