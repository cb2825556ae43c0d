use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::{DailyAggregate, DailySpend, DashboardSummary, MonthlyOrderPoint};
use crate::services::{daily_aggregator, summary_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/daily-orders", get(get_daily_orders))
        .route("/daily-spend", get(get_daily_spend))
        .route("/monthly-orders", get(get_monthly_orders))
}

async fn get_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let daily = daily_aggregator::aggregate_daily(&state.data.orders);
    Json(summary_service::summarize(&daily))
}

async fn get_daily_orders(State(state): State<AppState>) -> Json<Vec<DailyAggregate>> {
    Json(daily_aggregator::aggregate_daily(&state.data.orders))
}

async fn get_daily_spend(State(state): State<AppState>) -> Json<Vec<DailySpend>> {
    Json(daily_aggregator::aggregate_daily_spend(&state.data.orders))
}

async fn get_monthly_orders(State(state): State<AppState>) -> Json<Vec<MonthlyOrderPoint>> {
    Json(state.data.monthly_orders.clone())
}
