pub mod category;
pub mod order_status;
pub mod region;

pub use category::{Category, CategoryFilter};
pub use order_status::OrderStatus;
pub use region::Region;
