use anyhow::Result;
use std::path::PathBuf;

use crate::datasets::loader;
use crate::models::{
    CityCount, MonthlyOrderPoint, OrderRecord, ProductRanking, ReviewScoreCount, RfmEntry,
    StateCount, StatusCount,
};

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
}

impl DatasetConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
        }
    }
}

/// All dashboard extracts, loaded once at startup and immutable afterwards.
/// Handlers receive this through `AppState` instead of reaching for globals;
/// derived series are recomputed from `orders` on each request.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub orders: Vec<OrderRecord>,
    pub monthly_orders: Vec<MonthlyOrderPoint>,
    pub best_products: Vec<ProductRanking>,
    pub worst_products: Vec<ProductRanking>,
    pub customers_by_city: Vec<CityCount>,
    pub customers_by_state: Vec<StateCount>,
    pub order_status: Vec<StatusCount>,
    pub review_scores: Vec<ReviewScoreCount>,
    pub rfm: Vec<RfmEntry>,
}

impl DashboardData {
    /// Any malformed extract aborts the whole load; this is a one-shot batch
    /// read with no partial-failure recovery.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let dir = &config.data_dir;

        let orders = loader::load_csv(&dir.join("all_data.csv"), loader::read_orders)?;
        tracing::info!("📦 Loaded {} order payment rows", orders.len());

        let data = Self {
            orders,
            monthly_orders: loader::load_csv(
                &dir.join("monthly_orders.csv"),
                loader::read_monthly_orders,
            )?,
            best_products: loader::load_csv(
                &dir.join("best_products.csv"),
                loader::read_product_rankings,
            )?,
            worst_products: loader::load_csv(
                &dir.join("worst_products.csv"),
                loader::read_product_rankings,
            )?,
            customers_by_city: loader::load_csv(
                &dir.join("customer_by_city.csv"),
                loader::read_city_counts,
            )?,
            customers_by_state: loader::load_csv(
                &dir.join("customer_by_state.csv"),
                loader::read_state_counts,
            )?,
            order_status: loader::load_csv(
                &dir.join("order_by_order_status.csv"),
                loader::read_status_counts,
            )?,
            review_scores: loader::load_csv(
                &dir.join("order_reviews_score.csv"),
                loader::read_review_scores,
            )?,
            rfm: loader::load_csv(&dir.join("rfm_df.csv"), loader::read_rfm_entries)?,
        };

        Ok(data)
    }
}
