use bigdecimal::BigDecimal;

use crate::models::{DailyAggregate, DashboardSummary, SeriesMeta};

/// Collapses the daily series into the dashboard header metrics. Revenue is
/// the decimal sum of the daily totals; the currency code is data, formatting
/// belongs to the front-end.
pub fn summarize(daily: &[DailyAggregate]) -> DashboardSummary {
    let total_orders = daily.iter().map(|d| d.order_count).sum();
    let total_revenue = daily
        .iter()
        .fold(BigDecimal::from(0), |acc, d| acc + &d.total_value);

    DashboardSummary {
        total_orders,
        total_revenue,
        currency: "BRL".to_string(),
        meta: SeriesMeta {
            days: daily.len(),
            start: daily.first().map(|d| d.day),
            end: daily.last().map(|d| d.day),
        },
    }
}
