//! Router setup and configuration

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::get,
    routing::post,
    Router,
};

use crate::api::handlers;
use crate::api::state::AppState;
use crate::sort::StrategyKind;

/// Create the API router
///
/// One POST route per strategy (`/process-single`, `/process-concurrent`)
/// plus `/metrics`. Request bodies are not size-limited; a batch may hold
/// any number of sequences.
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    for kind in StrategyKind::ALL {
        router = router.route(
            &format!("/{}", kind.route()),
            post(move |State(state): State<Arc<AppState>>, body: Bytes| {
                handlers::sort_batch(state, kind, body)
            }),
        );
    }

    router
        .route("/metrics", get(handlers::metrics))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
