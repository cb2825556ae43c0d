use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::StatusCount;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(get_status_counts))
}

async fn get_status_counts(State(state): State<AppState>) -> Json<Vec<StatusCount>> {
    let mut counts = state.data.order_status.clone();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Json(counts)
}
