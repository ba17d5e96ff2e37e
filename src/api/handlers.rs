//! Request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::api::dto::{SortRequest, SortResponse};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::metrics::export_metrics;
use crate::sort::StrategyKind;

/// POST /process-single and /process-concurrent
///
/// Decodes the batch, runs the strategy behind `kind` and encodes its
/// outcome verbatim.
#[instrument(skip(state, body), fields(strategy = %kind, body_bytes = body.len()))]
pub async fn sort_batch(
    state: Arc<AppState>,
    kind: StrategyKind,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: SortRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e)))?;

    let strategy = state.strategy(kind)?;
    let outcome = strategy.sort_batch(request.batch()).await?;
    debug!(sequences = outcome.len(), elapsed_ns = outcome.elapsed_ns, "Batch sorted");

    let body = serde_json::to_vec(&SortResponse::from(outcome))
        .map_err(|e| ApiError::Internal(format!("Failed to encode response: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// GET /metrics
pub async fn metrics() -> Result<Response, ApiError> {
    let text = export_metrics().map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        text,
    )
        .into_response())
}
