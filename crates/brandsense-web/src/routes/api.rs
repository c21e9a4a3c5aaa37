//! JSON analysis endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brandsense_core::{AnalysisOutcome, Session, Trigger};
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub brands: String,
}

/// POST /api/analyze
///
/// `200` with the verdicts, `422` for blank or missing comments or no brand
/// found, `502` when the model call or its output failed.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let mut session = Session::with_input(&req.comments, &req.brands);

    let status = match session.trigger_analyze() {
        Trigger::Start(request) => {
            let result = state
                .analyzer
                .analyze(&request.comment_text, &request.brand_names_raw)
                .await;
            let status = match &result {
                Ok(verdicts) if verdicts.is_empty() => StatusCode::UNPROCESSABLE_ENTITY,
                Ok(_) => StatusCode::OK,
                Err(_) => StatusCode::BAD_GATEWAY,
            };
            session.settle(result);
            status
        }
        // A fresh session is never busy.
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };

    match session.outcome() {
        AnalysisOutcome::Results(verdicts) => (status, Json(verdicts)).into_response(),
        AnalysisOutcome::Error(message) => (status, Json(json!({ "error": message }))).into_response(),
        AnalysisOutcome::Idle | AnalysisOutcome::Loading => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "analysis did not settle" })),
        )
            .into_response(),
    }
}
