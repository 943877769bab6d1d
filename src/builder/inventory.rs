//! Inventory valuation measurements.

use super::creator::{present, MeasurementCreator};
use crate::items::{aggregate, ItemStack};
use crate::model::{Measurement, Series, SeriesName};
use serde::{Deserialize, Serialize};

/// Item containers that can be sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryId {
    Inventory,
    Equipment,
    Bank,
    SeedVault,
    GroupStorage,
    LootingBag,
}

impl InventoryId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inventory => "INVENTORY",
            Self::Equipment => "EQUIPMENT",
            Self::Bank => "BANK",
            Self::SeedVault => "SEED_VAULT",
            Self::GroupStorage => "GROUP_STORAGE",
            Self::LootingBag => "LOOTING_BAG",
        }
    }
}

/// Which valuation an inventory measurement carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvValueType {
    /// Market (grand exchange) value
    Ge,
    /// High alchemy value
    Ha,
    /// Item quantities
    Count,
}

impl InvValueType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ge => "GE",
            Self::Ha => "HA",
            Self::Count => "COUNT",
        }
    }
}

impl MeasurementCreator<'_> {
    pub fn create_item_series(&self, inventory: InventoryId, kind: InvValueType) -> Option<Series> {
        present(
            self.series(SeriesName::Inventory)
                .tag("inventory", inventory.name())
                .tag("type", kind.name())
                .build(),
        )
    }

    /// Market, alchemy and count views of one container
    ///
    /// # Returns
    /// Up to three measurements (GE, HA, COUNT). The count view is left out
    /// when no stack crossed the value threshold; everything is left out
    /// when the player identity is unknown.
    pub fn create_item_measurements(
        &self,
        inventory: InventoryId,
        items: &[ItemStack],
    ) -> Vec<Measurement> {
        let valuation = aggregate(items, self.catalog, &self.valuation);

        let ge = self.create_item_series(inventory, InvValueType::Ge).and_then(|series| {
            Self::finish(
                Measurement::builder(series)
                    .numerics(valuation.market)
                    .numeric("total", valuation.total_market)
                    .numeric("other", valuation.other_market),
            )
        });

        let ha = self.create_item_series(inventory, InvValueType::Ha).and_then(|series| {
            Self::finish(
                Measurement::builder(series)
                    .numerics(valuation.alch)
                    .numeric("total", valuation.total_alch)
                    .numeric("other", valuation.other_alch),
            )
        });

        let count = self
            .create_item_series(inventory, InvValueType::Count)
            .and_then(|series| {
                Self::finish(Measurement::builder(series).numerics(valuation.count))
            });

        [ge, ha, count].into_iter().flatten().collect()
    }
}
