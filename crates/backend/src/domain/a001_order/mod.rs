pub mod catalog;
pub mod generator;
pub mod store;

pub use generator::{GeneratorSettings, OrderSource, RandomOrderSource};
pub use store::OrderStore;
