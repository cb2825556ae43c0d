use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar-day bucket of approved orders.
///
/// `order_count` counts distinct order ids for the day; `total_value` sums
/// every payment row, so installments of the same order all contribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub day: NaiveDate,
    pub order_count: u64,
    pub total_value: BigDecimal,
}

/// Spend-only restriction of [`DailyAggregate`] for the spend view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySpend {
    pub day: NaiveDate,
    pub total_spend: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub days: usize,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Header metrics for the dashboard landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_orders: u64,
    pub total_revenue: BigDecimal,
    pub currency: String,
    pub meta: SeriesMeta,
}
