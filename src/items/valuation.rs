//! Threshold-bucketed valuation of item containers.
//!
//! A container can hold hundreds of stacks, most of them worth next to
//! nothing. Stacks above the value threshold keep their own field; the rest
//! are folded into a single `other` number per view.

use super::catalog::ItemCatalog;
use super::identity::{IdentityResolver, ItemStack, ResolvedItem};
use crate::utils::config::{
    HIGH_ALCHEMY_MULTIPLIER, HIGH_VALUE_THRESHOLD, ITEM_BANK_FILLER, ITEM_COINS,
    ITEM_PLATINUM_TOKEN, PLATINUM_TOKEN_VALUE,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A currency-like item valued at face value instead of through the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyOverride {
    /// Canonical item id
    pub item_id: i32,

    /// Coins per unit
    pub multiplier: i64,
}

/// Valuation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Value above which a stack gets its own field
    pub threshold: i64,

    pub high_alchemy_multiplier: f64,

    pub currency_overrides: Vec<CurrencyOverride>,

    /// Raw ids that never contribute to any output
    pub blocked_ids: Vec<i32>,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            threshold: HIGH_VALUE_THRESHOLD,
            high_alchemy_multiplier: HIGH_ALCHEMY_MULTIPLIER,
            currency_overrides: vec![
                CurrencyOverride {
                    item_id: ITEM_COINS,
                    multiplier: 1,
                },
                CurrencyOverride {
                    item_id: ITEM_PLATINUM_TOKEN,
                    multiplier: PLATINUM_TOKEN_VALUE,
                },
            ],
            blocked_ids: vec![ITEM_BANK_FILLER],
        }
    }
}

impl ValuationConfig {
    fn currency_multiplier(&self, canonical_id: i32) -> Option<i64> {
        self.currency_overrides
            .iter()
            .find(|o| o.item_id == canonical_id)
            .map(|o| o.multiplier)
    }
}

/// Market and alchemy value of one resolved stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackValue {
    pub market: i64,
    pub alch: i64,
}

/// Result of one aggregation pass over a container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerValuation {
    /// Per-item market value of high-value stacks
    pub market: BTreeMap<String, i64>,

    /// Per-item alchemy value of high-value stacks
    pub alch: BTreeMap<String, i64>,

    /// Per-item quantity of high-value stacks
    pub count: BTreeMap<String, i64>,

    pub total_market: i64,
    pub total_alch: i64,
    pub other_market: i64,
    pub other_alch: i64,
}

fn add_to_map(map: &mut BTreeMap<String, i64>, key: &str, value: i64) {
    let entry = map.entry(key.to_string()).or_insert(0);
    *entry = entry.saturating_add(value);
}

/// Value a single resolved stack
pub fn value_stack(
    item: &ResolvedItem,
    catalog: &dyn ItemCatalog,
    config: &ValuationConfig,
) -> StackValue {
    if let Some(multiplier) = config.currency_multiplier(item.canonical_id) {
        let face = item.quantity.saturating_mul(multiplier);
        return StackValue {
            market: face,
            alch: face,
        };
    }

    let alch_each =
        (item.definition.store_price as f64 * config.high_alchemy_multiplier).floor() as i64;
    StackValue {
        market: catalog
            .market_price(item.canonical_id)
            .saturating_mul(item.quantity),
        alch: alch_each.saturating_mul(item.quantity),
    }
}

/// Aggregate a container's stacks into bucketed valuations
///
/// **Public** - main entry point for valuation
///
/// # Arguments
/// * `stacks` - Raw stacks, in any order, possibly with empty slots
/// * `catalog` - Item catalog and price oracle
/// * `config` - Threshold, multipliers and override table
///
/// # Returns
/// Per-item maps for stacks above threshold plus totals over every
/// non-skipped stack
pub fn aggregate(
    stacks: &[ItemStack],
    catalog: &dyn ItemCatalog,
    config: &ValuationConfig,
) -> ContainerValuation {
    let resolver = IdentityResolver::new(catalog, &config.blocked_ids);
    let mut valuation = ContainerValuation::default();

    for item in stacks.iter().filter_map(|stack| resolver.resolve(stack)) {
        let value = value_stack(&item, catalog, config);

        valuation.total_market = valuation.total_market.saturating_add(value.market);
        valuation.total_alch = valuation.total_alch.saturating_add(value.alch);

        let high_value = value.market > config.threshold || value.alch > config.threshold;
        if high_value {
            add_to_map(&mut valuation.market, &item.key, value.market);
            add_to_map(&mut valuation.alch, &item.key, value.alch);
            add_to_map(&mut valuation.count, &item.key, item.quantity);
        } else {
            valuation.other_market = valuation.other_market.saturating_add(value.market);
            valuation.other_alch = valuation.other_alch.saturating_add(value.alch);
        }
    }

    debug!(
        "Valued {} stacks: {} tracked items, total {} gp",
        stacks.len(),
        valuation.market.len(),
        valuation.total_market
    );

    valuation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog::StaticCatalog;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_item(ITEM_COINS, "Coins", 1, 1)
            .with_item(ITEM_PLATINUM_TOKEN, "Platinum token", 1, 1_000)
            .with_item(4151, "Abyssal whip", 120_001, 1_500_000)
            .with_item(1511, "Logs", 4, 30)
    }

    #[test]
    fn test_coins_at_face_value() {
        let catalog = catalog();
        let result = aggregate(
            &[ItemStack::new(ITEM_COINS, 60_000)],
            &catalog,
            &ValuationConfig::default(),
        );

        assert_eq!(result.total_market, 60_000);
        assert_eq!(result.total_alch, 60_000);
        assert_eq!(result.market.get("Coins@995"), Some(&60_000));
    }

    #[test]
    fn test_platinum_tokens_scaled() {
        let catalog = catalog();
        let result = aggregate(
            &[ItemStack::new(ITEM_PLATINUM_TOKEN, 3)],
            &catalog,
            &ValuationConfig::default(),
        );
        assert_eq!(result.total_market, 3_000);
        assert_eq!(result.total_alch, 3_000);
        assert_eq!(result.other_market, 3_000);
    }

    #[test]
    fn test_alch_uses_floored_store_price() {
        let catalog = catalog();
        let result = aggregate(
            &[ItemStack::new(4151, 1)],
            &catalog,
            &ValuationConfig::default(),
        );

        // floor(120_001 * 0.6) = 72_000
        assert_eq!(result.alch.get("Abyssal whip@4151"), Some(&72_000));
        assert_eq!(result.market.get("Abyssal whip@4151"), Some(&1_500_000));
        assert_eq!(result.count.get("Abyssal whip@4151"), Some(&1));
    }

    #[test]
    fn test_low_value_folded_into_other() {
        let catalog = catalog();
        let result = aggregate(
            &[ItemStack::new(1511, 100)],
            &catalog,
            &ValuationConfig::default(),
        );

        assert!(result.market.is_empty());
        assert!(result.count.is_empty());
        assert_eq!(result.other_market, 3_000);
        assert_eq!(result.other_alch, 200);
    }

    #[test]
    fn test_extra_override_entry() {
        let catalog = catalog();
        let mut config = ValuationConfig::default();
        config.currency_overrides.push(CurrencyOverride {
            item_id: 1511,
            multiplier: 10,
        });

        let result = aggregate(&[ItemStack::new(1511, 7)], &catalog, &config);
        assert_eq!(result.total_market, 70);
        assert_eq!(result.total_alch, 70);
    }

    #[test]
    fn test_huge_stacks_saturate_totals() {
        let catalog =
            StaticCatalog::new().with_item(11802, "Armadyl godsword", i64::MAX, i64::MAX);
        let stacks = vec![ItemStack::new(11802, i64::MAX / 2); 3];

        let result = aggregate(&stacks, &catalog, &ValuationConfig::default());

        assert_eq!(result.total_market, i64::MAX);
        assert_eq!(result.total_alch, i64::MAX);
        assert_eq!(result.market.get("Armadyl godsword@11802"), Some(&i64::MAX));
        assert_eq!(result.count.get("Armadyl godsword@11802"), Some(&i64::MAX));
    }

    #[test]
    fn test_huge_low_value_stacks_saturate_other() {
        let mut config = ValuationConfig::default();
        config.threshold = i64::MAX;
        let catalog = catalog();
        let stacks = vec![ItemStack::new(ITEM_COINS, i64::MAX - 1); 2];

        let result = aggregate(&stacks, &catalog, &config);

        assert_eq!(result.other_market, i64::MAX);
        assert_eq!(result.other_alch, i64::MAX);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ValuationConfig = serde_json::from_str(r#"{ "threshold": 10 }"#).unwrap();
        assert_eq!(config.threshold, 10);
        assert_eq!(config.blocked_ids, vec![ITEM_BANK_FILLER]);
        assert_eq!(config.currency_overrides.len(), 2);
    }
}
