use super::AppState;
use crate::{
    Error,
    instrumentation::{OUTCOME_DATA_SOURCE_ERROR, OUTCOME_OK, record_request},
    processor::{request::AnalyticsRequest, run_analytics},
};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Instant;
use tracing::{debug, error};

/// Body returned when the dataset cannot be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

/// CORS preflight; headers come from the middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST handler: lenient body parsing, dataset load, per-region aggregation.
pub async fn analytics(State(state): State<AppState>, body: Bytes) -> Response {
    let request = AnalyticsRequest::from_body(&body, state.default_threshold_ms);
    let region_count = request.regions.len();
    debug!(
        regions = ?request.regions,
        threshold_ms = request.threshold_ms,
        "analytics request"
    );

    let start = Instant::now();
    let data_file = state.data_file.clone();
    let outcome = tokio::task::spawn_blocking(move || run_analytics(&data_file, &request))
        .await
        .map_err(Error::from)
        .and_then(|result| result);

    match outcome {
        Ok(response) => {
            record_request(OUTCOME_OK, region_count, start.elapsed());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            error!(
                ?err,
                kind = err.kind(),
                data_file = %state.data_file.display(),
                "failed to load data file"
            );
            record_request(OUTCOME_DATA_SOURCE_ERROR, region_count, start.elapsed());

            let body = ErrorBody {
                error: "Failed to load data file".to_string(),
                detail: err.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
