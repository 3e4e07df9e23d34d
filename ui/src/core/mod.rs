//! Platform-agnostic core: play records, loading, filtering and aggregation.

pub mod config;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod play;
pub mod stats;

pub use config::DashboardConfig;
pub use dataset::{load, DataSource, Dataset, FilterOptions, LoadError};
pub use filter::{filter, matches, DistanceBucket, FilterCriteria};
pub use play::{PassResult, PlayRecord};
pub use stats::{summarize, ResultCounts, Stats, StatsDisplay};
