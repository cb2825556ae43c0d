use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::models::{CityCount, StateCount};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/states", get(get_states))
}

#[derive(Debug, Deserialize)]
struct DemographicsQuery {
    limit: Option<usize>,
}

async fn get_cities(
    Query(params): Query<DemographicsQuery>,
    State(state): State<AppState>,
) -> Json<Vec<CityCount>> {
    let limit = params.limit.unwrap_or(10);
    Json(state.data.customers_by_city.iter().take(limit).cloned().collect())
}

async fn get_states(
    Query(params): Query<DemographicsQuery>,
    State(state): State<AppState>,
) -> Json<Vec<StateCount>> {
    let limit = params.limit.unwrap_or(10);
    Json(state.data.customers_by_state.iter().take(limit).cloned().collect())
}
