use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::models::{DailyAggregate, DailySpend, OrderRecord};

#[derive(Default)]
struct DayBucket {
    order_ids: HashSet<String>,
    total_value: BigDecimal,
}

/// Groups order rows into calendar-day buckets.
///
/// Rows without an approval timestamp are skipped (the order was never
/// approved, so it has no day). Per day, `order_count` deduplicates by
/// `order_id` while `total_value` sums every row, so multi-installment
/// orders count once but pay in full. Output is ascending by day and only
/// contains days that actually occur in the input.
pub fn aggregate_daily(records: &[OrderRecord]) -> Vec<DailyAggregate> {
    // BTreeMap keeps the day buckets sorted as we fill them.
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for record in records {
        let Some(approved_at) = record.approved_at else {
            continue;
        };

        let bucket = buckets.entry(approved_at.date()).or_default();
        bucket.order_ids.insert(record.order_id.clone());
        bucket.total_value += &record.payment_value;
    }

    buckets
        .into_iter()
        .map(|(day, bucket)| DailyAggregate {
            day,
            order_count: bucket.order_ids.len() as u64,
            total_value: bucket.total_value,
        })
        .collect()
}

/// Spend-only view: same partitioning, projected down to the daily sum.
pub fn aggregate_daily_spend(records: &[OrderRecord]) -> Vec<DailySpend> {
    aggregate_daily(records)
        .into_iter()
        .map(|d| DailySpend {
            day: d.day,
            total_spend: d.total_value,
        })
        .collect()
}
