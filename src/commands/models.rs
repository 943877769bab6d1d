use crate::builder::SampleRequest;
use crate::client::{ClientSnapshot, MemoryConfigStore, RegionSet, WorldTagTable};
use crate::items::{StaticCatalog, ValuationConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments for the sample command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SampleArgs {
    /// Snapshot bundle to read
    pub snapshot: PathBuf,

    /// Output path for the JSON measurement batch
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for SampleArgs {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("snapshot.json"),
            output_json: PathBuf::from("measurements.json"),
            print_summary: false,
        }
    }
}

/// Everything needed to sample once, as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotBundle {
    pub client: ClientSnapshot,

    #[serde(default)]
    pub catalog: StaticCatalog,

    /// Persisted plugin configuration (kill counts, personal bests)
    #[serde(default)]
    pub config: MemoryConfigStore,

    #[serde(default)]
    pub request: SampleRequest,

    #[serde(default)]
    pub world_tags: Option<WorldTagTable>,

    #[serde(default)]
    pub valuation: Option<ValuationConfig>,

    /// Last Man Standing arena regions, when they differ from the built-in set
    #[serde(default)]
    pub lms_regions: Option<RegionSet>,
}
