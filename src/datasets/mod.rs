mod context;
pub mod loader;

pub use context::{DashboardData, DatasetConfig};
