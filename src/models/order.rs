use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One payment/installment row from the orders extract. `order_id` is not
/// unique per row; an order with three installments appears three times.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: String,
    /// Approval timestamp; `None` for orders that were never approved.
    pub approved_at: Option<NaiveDateTime>,
    pub payment_value: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub order_status: String,
    pub count: u64,
}
