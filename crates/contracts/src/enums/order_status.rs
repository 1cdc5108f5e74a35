use serde::{Deserialize, Serialize};

/// Fulfilment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Processing,
}

impl OrderStatus {
    /// Sampling table for generated orders, Delivered weighted 2:1:1
    pub fn weighted() -> [OrderStatus; 4] {
        [
            OrderStatus::Delivered,
            OrderStatus::Shipped,
            OrderStatus::Processing,
            OrderStatus::Delivered,
        ]
    }
}
