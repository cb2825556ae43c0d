use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::ReviewScoreCount;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_review_scores))
}

async fn get_review_scores(State(state): State<AppState>) -> Json<Vec<ReviewScoreCount>> {
    Json(state.data.review_scores.clone())
}
