use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::ProductRanking;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_products))
}

#[derive(Debug, Deserialize)]
struct RankingQuery {
    bucket: Option<String>,
    limit: Option<usize>,
}

async fn get_products(
    Query(params): Query<RankingQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRanking>>, AppError> {
    let rankings = match params.bucket.as_deref().unwrap_or("best") {
        "best" => &state.data.best_products,
        "worst" => &state.data.worst_products,
        other => {
            return Err(AppError::Validation(format!(
                "unknown product bucket: {}",
                other
            )))
        }
    };

    let limit = params.limit.unwrap_or(5);
    Ok(Json(rankings.iter().take(limit).cloned().collect()))
}
