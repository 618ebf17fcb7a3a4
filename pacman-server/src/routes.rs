use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use pacman_common::ScoreRecord;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{app::AppState, errors::ErrorResponse};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub leaderboard: Vec<ScoreRecord>,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

pub async fn root_handler() -> &'static str {
    "Pac-Man leaderboard is running"
}

#[instrument(skip_all)]
pub async fn leaderboard_handler(State(app_state): State<AppState>) -> Json<Vec<ScoreRecord>> {
    let top = app_state.leaderboard.read().await.top(app_state.config.leaderboard_limit);
    debug!(count = top.len(), "Serving leaderboard");
    Json(top)
}

/// Checks a submission body. The name must be a non-blank string and the score a non-negative
/// integer that fits in 32 bits.
fn parse_submission(body: &Value) -> Result<ScoreRecord, ErrorResponse> {
    let name = match body.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim(),
        _ => return Err(ErrorResponse::invalid_data("name must be a non-empty string")),
    };

    let score = body
        .get("score")
        .and_then(Value::as_u64)
        .and_then(|score| u32::try_from(score).ok())
        .ok_or_else(|| ErrorResponse::invalid_data("score must be a non-negative integer"))?;

    Ok(ScoreRecord::new(name, score))
}

#[instrument(skip_all)]
pub async fn submit_score_handler(
    State(app_state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected unreadable score submission");
            return ErrorResponse::invalid_data(rejection.body_text()).into_response();
        }
    };

    let record = match parse_submission(&body) {
        Ok(record) => record,
        Err(e) => {
            warn!(error = ?e.description, "Rejected score submission");
            return e.into_response();
        }
    };

    info!(name = %record.name, score = record.score, "Score submitted");
    let mut store = app_state.leaderboard.write().await;
    store.submit(record);

    Json(SubmitResponse {
        success: true,
        leaderboard: store.top(app_state.config.leaderboard_limit),
    })
    .into_response()
}

#[instrument(skip_all)]
pub async fn clear_leaderboard_handler(State(app_state): State<AppState>) -> Json<ClearResponse> {
    let removed = app_state.leaderboard.write().await.clear();
    info!(removed, "Leaderboard cleared");
    Json(ClearResponse {
        success: true,
        message: "Leaderboard cleared".into(),
    })
}
