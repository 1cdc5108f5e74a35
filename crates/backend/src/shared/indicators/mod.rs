pub mod compute;
pub mod metadata;
pub mod registry;

pub use registry::{IndicatorRegistry, PeriodOrders};
