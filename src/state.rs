use std::sync::Arc;

use crate::datasets::DashboardData;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<DashboardData>,
}
