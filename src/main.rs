use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use shoplytics_backend::app;
use shoplytics_backend::datasets::{DashboardData, DatasetConfig};
use shoplytics_backend::logging::{self, LoggingConfig};
use shoplytics_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let config = DatasetConfig::from_env();
    tracing::info!(
        "📦 Loading dashboard extracts from {}",
        config.data_dir.display()
    );
    let data = DashboardData::load(&config)?;

    let state = AppState {
        data: Arc::new(data),
    };
    let app = app::create_app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Shoplytics backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
