use anyhow::{bail, Context, Result};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::models::{
    CityCount, MonthlyOrderPoint, OrderRecord, ProductRanking, ReviewScoreCount, RfmEntry,
    StateCount, StatusCount,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct OrderRow {
    order_id: String,
    order_approved_at: String,
    payment_value: String,
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(rename = "product_category_name_english")]
    category: String,
    #[serde(rename = "order_id")]
    order_count: u64,
}

#[derive(Debug, Deserialize)]
struct MonthlyRow {
    #[serde(rename = "order_approved_at")]
    month: String,
    #[serde(rename = "order_id")]
    order_count: u64,
}

/// An empty timestamp means the order was never approved. Anything non-empty
/// must parse; a value that is present but unreadable fails the whole load
/// rather than being silently dropped.
fn parse_timestamp(s: &str) -> Result<Option<NaiveDateTime>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .with_context(|| format!("unparseable timestamp: {}", trimmed))?;
    Ok(Some(parsed))
}

/// Payment amounts must be non-negative decimals; empty cells count as zero.
fn parse_amount(s: &str) -> Result<BigDecimal> {
    let cleaned = s.replace(',', "").trim().to_string();
    if cleaned.is_empty() {
        return Ok(BigDecimal::from(0));
    }

    let value = BigDecimal::from_str(&cleaned)
        .with_context(|| format!("unparseable payment amount: {}", s))?;
    if value < BigDecimal::from(0) {
        bail!("negative payment amount: {}", s);
    }
    Ok(value)
}

pub fn read_orders<R: Read>(reader: R) -> Result<Vec<OrderRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut records = Vec::new();
    for (line_num, row) in csv_reader.deserialize::<OrderRow>().enumerate() {
        let row = row.with_context(|| format!("line {}: malformed order row", line_num + 2))?;
        let approved_at = parse_timestamp(&row.order_approved_at)
            .with_context(|| format!("line {}: order {}", line_num + 2, row.order_id))?;
        let payment_value = parse_amount(&row.payment_value)
            .with_context(|| format!("line {}: order {}", line_num + 2, row.order_id))?;

        records.push(OrderRecord {
            order_id: row.order_id,
            approved_at,
            payment_value,
        });
    }

    Ok(records)
}

fn read_rows<R: Read, T: DeserializeOwned>(reader: R, what: &str) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut rows = Vec::new();
    for (line_num, row) in csv_reader.deserialize::<T>().enumerate() {
        rows.push(row.with_context(|| format!("{}: line {}", what, line_num + 2))?);
    }
    Ok(rows)
}

pub fn read_product_rankings<R: Read>(reader: R) -> Result<Vec<ProductRanking>> {
    let rows: Vec<ProductRow> = read_rows(reader, "product ranking")?;
    Ok(rows
        .into_iter()
        .map(|r| ProductRanking {
            product_category: r.category,
            order_count: r.order_count,
        })
        .collect())
}

/// Monthly series comes unsorted in the extract; sort ascending by month so
/// the chart reads left to right ("YYYY-MM" labels sort chronologically).
pub fn read_monthly_orders<R: Read>(reader: R) -> Result<Vec<MonthlyOrderPoint>> {
    let rows: Vec<MonthlyRow> = read_rows(reader, "monthly orders")?;
    let mut points: Vec<MonthlyOrderPoint> = rows
        .into_iter()
        .map(|r| MonthlyOrderPoint {
            month: r.month,
            order_count: r.order_count,
        })
        .collect();
    points.sort_by(|a, b| a.month.cmp(&b.month));
    Ok(points)
}

pub fn read_city_counts<R: Read>(reader: R) -> Result<Vec<CityCount>> {
    read_rows(reader, "customers by city")
}

pub fn read_state_counts<R: Read>(reader: R) -> Result<Vec<StateCount>> {
    read_rows(reader, "customers by state")
}

pub fn read_status_counts<R: Read>(reader: R) -> Result<Vec<StatusCount>> {
    read_rows(reader, "orders by status")
}

pub fn read_review_scores<R: Read>(reader: R) -> Result<Vec<ReviewScoreCount>> {
    read_rows(reader, "review scores")
}

pub fn read_rfm_entries<R: Read>(reader: R) -> Result<Vec<RfmEntry>> {
    read_rows(reader, "rfm entries")
}

pub fn load_csv<T>(
    path: &Path,
    read: impl FnOnce(std::fs::File) -> Result<Vec<T>>,
) -> Result<Vec<T>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read(file).with_context(|| format!("failed to load {}", path.display()))
}
