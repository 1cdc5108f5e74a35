use crate::enums::{Category, OrderStatus, Region};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order number in the form `PREFIX-<sequence>`, e.g. `FKO-10000`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(prefix: &str, sequence: u64) -> Self {
        Self(format!("{}-{}", prefix, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sequence part of the id, `None` when the id does not follow the format
    pub fn sequence(&self) -> Option<u64> {
        self.0
            .rsplit_once('-')
            .and_then(|(_, seq)| seq.parse().ok())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single (synthetic) customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: OrderId,

    /// Order timestamp (UTC)
    pub date: DateTime<Utc>,

    pub category: Category,

    /// Product name from the category's catalog
    pub product: String,

    /// Units, 1..=3
    pub quantity: u32,

    /// Unit price (INR)
    pub price: u32,

    #[serde(rename = "customerId")]
    pub customer_id: String,

    pub status: OrderStatus,

    pub state: Region,
}

impl Order {
    /// Revenue of the order: price × quantity
    pub fn revenue(&self) -> f64 {
        self.price as f64 * self.quantity as f64
    }
}
