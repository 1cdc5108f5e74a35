pub mod charts;
pub mod insights;
pub mod service;
pub mod snapshot;

pub use insights::{generate_insights, summarize_insights};
pub use service::*;
pub use snapshot::{build_snapshot, SnapshotSettings};
