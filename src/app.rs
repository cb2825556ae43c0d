use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{customers, dashboard, health, orders, products, reviews, rfm};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // Permissive CORS: the browser dashboard is served from a different origin.
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/dashboard", dashboard::router())
        .nest("/api/products", products::router())
        .nest("/api/customers", customers::router())
        .nest("/api/orders", orders::router())
        .nest("/api/reviews", reviews::router())
        .nest("/api/rfm", rfm::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
