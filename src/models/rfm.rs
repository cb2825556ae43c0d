use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Recency/Frequency/Monetary entry, computed upstream and served as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfmEntry {
    pub customer_id: String,
    /// Days since the customer's last order.
    pub recency: i64,
    pub frequency: u64,
    pub monetary: BigDecimal,
}
