use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::RfmEntry;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_top_customers))
}

#[derive(Debug, Deserialize)]
struct RfmQuery {
    rank_by: Option<String>,
    limit: Option<usize>,
}

/// Top customers by one RFM dimension. Recency ranks ascending (fewer days
/// since last order is better); frequency and monetary rank descending.
async fn get_top_customers(
    Query(params): Query<RfmQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RfmEntry>>, AppError> {
    let mut entries = state.data.rfm.clone();

    match params.rank_by.as_deref().unwrap_or("recency") {
        "recency" => entries.sort_by_key(|e| e.recency),
        "frequency" => entries.sort_by(|a, b| b.frequency.cmp(&a.frequency)),
        "monetary" => entries.sort_by(|a, b| b.monetary.cmp(&a.monetary)),
        other => {
            return Err(AppError::Validation(format!(
                "unknown RFM rank key: {}",
                other
            )))
        }
    }

    entries.truncate(params.limit.unwrap_or(5));
    Ok(Json(entries))
}
