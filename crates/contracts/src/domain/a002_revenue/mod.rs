use serde::{Deserialize, Serialize};

/// Units sold and revenue of one product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueRow {
    pub category: String,
    /// Units sold.
    #[serde(default)]
    pub sales: i64,
    /// Revenue in minor currency units (cents).
    #[serde(default)]
    pub revenue: i64,
}

/// Envelope of `GET /admin/revenue`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueResponse {
    #[serde(default)]
    pub data: Vec<RevenueRow>,
}
