//! The measurement creator and the base series every record shares.

use crate::client::{ClientSnapshot, ConfigStore, RegionSet, WorldTagTable};
use crate::items::{ItemCatalog, ValuationConfig};
use crate::model::{Measurement, MeasurementBuilder, Series, SeriesBuilder, SeriesName};
use crate::utils::config::TAG_USER;
use crate::utils::error::MeasurementError;
use log::debug;

/// Builds measurements from one client snapshot
///
/// Holds only shared borrows of its collaborators; every method is a pure
/// function of the snapshot and creates fresh accumulators per call.
pub struct MeasurementCreator<'a> {
    pub(crate) client: &'a ClientSnapshot,
    pub(crate) catalog: &'a dyn ItemCatalog,
    pub(crate) config_store: &'a dyn ConfigStore,
    pub(crate) world_tags: WorldTagTable,
    pub(crate) valuation: ValuationConfig,
    pub(crate) lms_regions: RegionSet,
}

impl<'a> MeasurementCreator<'a> {
    /// Create a creator with the default world tag table and valuation config
    pub fn new(
        client: &'a ClientSnapshot,
        catalog: &'a dyn ItemCatalog,
        config_store: &'a dyn ConfigStore,
    ) -> Self {
        Self {
            client,
            catalog,
            config_store,
            world_tags: WorldTagTable::default(),
            valuation: ValuationConfig::default(),
            lms_regions: RegionSet::default(),
        }
    }

    pub fn with_world_tags(mut self, world_tags: WorldTagTable) -> Self {
        self.world_tags = world_tags;
        self
    }

    pub fn with_valuation(mut self, valuation: ValuationConfig) -> Self {
        self.valuation = valuation;
        self
    }

    pub fn with_lms_regions(mut self, lms_regions: RegionSet) -> Self {
        self.lms_regions = lms_regions;
        self
    }

    /// Whether the local player stands inside a Last Man Standing arena
    ///
    /// Instanced tiles are resolved to their template first. No local player
    /// or an unresolvable tile counts as outside.
    pub fn is_in_last_man_standing(&self) -> bool {
        self.client
            .local_player
            .as_ref()
            .and_then(|player| self.client.to_world(player.location))
            .is_some_and(|point| self.lms_regions.contains(point.region_id()))
    }

    /// Series builder preloaded with the world tags and the user
    ///
    /// `user` goes last so no world tag can replace it.
    pub(crate) fn series(&self, name: SeriesName) -> SeriesBuilder {
        Series::builder(name)
            .tags(self.world_tags.tags_for_world(&self.client.world_types))
            .tag(TAG_USER, self.client.username().unwrap_or_default())
    }

    /// Turn a builder into a record, logging why nothing was produced
    pub(crate) fn finish(builder: MeasurementBuilder) -> Option<Measurement> {
        present(builder.build())
    }
}

/// Map an invariant violation to "no record"
pub(crate) fn present<T>(result: Result<T, MeasurementError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("No record produced: {}", e);
            None
        }
    }
}
