use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use time::format_description::well_known::Rfc3339;
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    extract::ApiJson,
    state::AppState,
    stress::{
        dto::{HistoryEntry, SaveStressRequest, SaveStressResponse},
        repo::StressRecord,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/save_stress", post(save_stress))
        .route("/history/:user_id", get(history))
}

#[instrument(skip(state, payload))]
pub async fn save_stress(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SaveStressRequest>,
) -> Result<Json<SaveStressResponse>, ApiError> {
    let (Some(user_id), Some(stress_level)) = (payload.user_id, payload.stress_level) else {
        warn!("save_stress with missing fields");
        return Err(ApiError::Validation("User ID and stress level required"));
    };

    let source = payload
        .source
        .as_deref()
        .unwrap_or(&state.config.default_stress_source);

    // No existence check on user_id; the foreign key decides.
    let record = StressRecord::insert(&state.db, user_id, stress_level, source).await?;

    info!(record_id = record.id, user_id, "stress record saved");
    Ok(Json(SaveStressResponse {
        message: "Stress record saved successfully",
    }))
}

#[instrument(skip(state))]
pub async fn history(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let rows = StressRecord::list_by_user(&state.db, user_id).await?;

    let entries = rows
        .into_iter()
        .map(|r| HistoryEntry {
            stress_level: r.stress_level,
            time: r
                .created_at
                .format(&Rfc3339)
                .unwrap_or_else(|_| r.created_at.to_string()),
            source: r.source,
        })
        .collect();

    Ok(Json(entries))
}
