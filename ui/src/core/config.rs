//! Dashboard settings supplied by the platform launcher.

use dioxus::prelude::*;

use super::dataset::DataSource;

/// Bundled play dataset.
pub const PLAYS_JSON: Asset = asset!("/assets/data/plays.json");

/// How many matching plays the list shows.
pub const SAMPLE_SIZE: usize = 20;

/// Provided through context by `web`/`desktop`; components fall back to
/// [`DashboardConfig::default`] when nothing is provided.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub sample_size: usize,
}

impl DashboardConfig {
    pub fn with_source(source: DataSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            sample_size: SAMPLE_SIZE,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_source() -> DataSource {
    DataSource::Url(PLAYS_JSON.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_source() -> DataSource {
    DataSource::File(std::path::PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/plays.json"
    )))
}
