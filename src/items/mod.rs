//! Item identity and container valuation.
//!
//! This module turns raw item stacks into:
//! - Canonical ids and display keys
//! - Market and alchemy valuations, bucketed by a value threshold

pub mod catalog;
pub mod identity;
pub mod valuation;

// Re-export main types and functions
pub use catalog::{CatalogItem, ItemCatalog, ItemDefinition, StaticCatalog};
pub use identity::{item_key, IdentityResolver, ItemStack, ResolvedItem};
pub use valuation::{
    aggregate, value_stack, ContainerValuation, CurrencyOverride, StackValue, ValuationConfig,
};
