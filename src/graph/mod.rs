//! The cross-reference graph: construction, metrics and report types.

pub mod builder;
pub mod clusters;
pub mod metrics;
pub mod recommend;
pub mod resolver;
pub mod types;

pub use builder::{build, build_from_sources};
pub use types::{DocumentNode, GraphMetrics, GraphReport, HubEntry, SkippedDocument};
