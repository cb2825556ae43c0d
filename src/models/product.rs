use serde::{Deserialize, Serialize};

/// Pre-aggregated order count per product category (English name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRanking {
    pub product_category: String,
    pub order_count: u64,
}
