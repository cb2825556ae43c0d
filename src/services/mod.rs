pub mod daily_aggregator;
pub mod summary_service;
