use serde::{Deserialize, Serialize};

/// One point of the monthly sales-performance series. The month keeps the
/// label format of the extract (e.g. "2018-01"), which sorts chronologically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyOrderPoint {
    pub month: String,
    pub order_count: u64,
}
