mod customer;
mod daily;
mod monthly;
mod order;
mod product;
mod review;
mod rfm;

pub use customer::{CityCount, StateCount};
pub use daily::{DailyAggregate, DailySpend, DashboardSummary, SeriesMeta};
pub use monthly::MonthlyOrderPoint;
pub use order::{OrderRecord, StatusCount};
pub use product::ProductRanking;
pub use review::ReviewScoreCount;
pub use rfm::RfmEntry;
