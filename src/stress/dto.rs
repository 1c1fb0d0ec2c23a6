use serde::{Deserialize, Serialize};

/// Request body for stress submission. `user_id` and `stress_level` are
/// Options so a level of 0 still counts as present.
#[derive(Debug, Deserialize)]
pub struct SaveStressRequest {
    pub user_id: Option<i32>,
    pub stress_level: Option<i32>,
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveStressResponse {
    pub message: &'static str,
}

/// One history row as returned to the client.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub stress_level: i32,
    pub source: String,
    pub time: String,
}
