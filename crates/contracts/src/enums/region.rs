use serde::{Deserialize, Serialize};

/// Shipping state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Maharashtra,
    Karnataka,
    Delhi,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Gujarat,
    #[serde(rename = "West Bengal")]
    WestBengal,
}

impl Region {
    pub fn all() -> Vec<Region> {
        vec![
            Region::Maharashtra,
            Region::Karnataka,
            Region::Delhi,
            Region::TamilNadu,
            Region::Gujarat,
            Region::WestBengal,
        ]
    }
}
