use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewScoreCount {
    pub review_score: i32,
    pub count: u64,
}
