//! Item identity: canonical ids and collision-free display keys.

use super::catalog::{ItemCatalog, ItemDefinition};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A raw `(id, quantity)` stack as the client reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: i32,
    pub quantity: i64,
}

impl ItemStack {
    pub fn new(id: i32, quantity: i64) -> Self {
        Self { id, quantity }
    }
}

/// Display key for an item: its name plus canonical id
///
/// Two different items with the same name (quest variants, cosmetic
/// recolours) still get distinct keys.
pub fn item_key(definition: &ItemDefinition) -> String {
    format!("{}@{}", definition.name, definition.id)
}

/// A stack that passed the filters and was resolved through the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub canonical_id: i32,
    pub definition: ItemDefinition,
    pub key: String,
    pub quantity: i64,
}

/// Canonicalizes stacks and drops the ones that must never be aggregated
pub struct IdentityResolver<'a> {
    catalog: &'a dyn ItemCatalog,
    blocked_ids: &'a [i32],
}

impl<'a> IdentityResolver<'a> {
    pub fn new(catalog: &'a dyn ItemCatalog, blocked_ids: &'a [i32]) -> Self {
        Self {
            catalog,
            blocked_ids,
        }
    }

    /// Whether a raw stack may contribute to any output
    ///
    /// Empty slots carry negative ids, and placeholder ids on the block
    /// list only exist to reserve space.
    pub fn is_trackable(&self, stack: &ItemStack) -> bool {
        stack.id >= 0 && stack.quantity > 0 && !self.blocked_ids.contains(&stack.id)
    }

    /// Resolve a stack, or `None` if it should be skipped
    pub fn resolve(&self, stack: &ItemStack) -> Option<ResolvedItem> {
        if !self.is_trackable(stack) {
            debug!("Skipping stack {:?}", stack);
            return None;
        }

        let canonical_id = self.catalog.canonicalize(stack.id);
        let Some(definition) = self.catalog.definition(canonical_id) else {
            warn!(
                "No catalog definition for item {} (canonical {}), skipping",
                stack.id, canonical_id
            );
            return None;
        };

        Some(ResolvedItem {
            canonical_id,
            key: item_key(&definition),
            definition,
            quantity: stack.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog::StaticCatalog;
    use crate::utils::config::ITEM_BANK_FILLER;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_item(4151, "Abyssal whip", 120_001, 1_500_000)
            .with_item(1, "Toolkit", 0, 0)
            .with_item(2, "Toolkit", 0, 0)
            .with_item(ITEM_BANK_FILLER, "Bank filler", 0, 0)
            .with_variant(4152, 4151)
    }

    #[test]
    fn test_variant_resolves_to_canonical_key() {
        let catalog = catalog();
        let resolver = IdentityResolver::new(&catalog, &[ITEM_BANK_FILLER]);

        let item = resolver.resolve(&ItemStack::new(4152, 3)).unwrap();
        assert_eq!(item.canonical_id, 4151);
        assert_eq!(item.key, "Abyssal whip@4151");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_same_name_distinct_keys() {
        let catalog = catalog();
        let resolver = IdentityResolver::new(&catalog, &[]);

        let a = resolver.resolve(&ItemStack::new(1, 1)).unwrap();
        let b = resolver.resolve(&ItemStack::new(2, 1)).unwrap();
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_rejections() {
        let catalog = catalog();
        let resolver = IdentityResolver::new(&catalog, &[ITEM_BANK_FILLER]);

        assert!(resolver.resolve(&ItemStack::new(-1, 1)).is_none());
        assert!(resolver.resolve(&ItemStack::new(4151, 0)).is_none());
        assert!(resolver.resolve(&ItemStack::new(4151, -3)).is_none());
        assert!(resolver.resolve(&ItemStack::new(ITEM_BANK_FILLER, 1)).is_none());
    }

    #[test]
    fn test_unknown_definition_skipped() {
        let catalog = catalog();
        let resolver = IdentityResolver::new(&catalog, &[]);
        assert!(resolver.resolve(&ItemStack::new(777, 1)).is_none());
    }
}
