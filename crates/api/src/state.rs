use std::sync::Arc;

use climate_core::evaluator::ReadingEvaluator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the evaluator sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Reading evaluator, shared by every request.
    pub evaluator: Arc<ReadingEvaluator>,
    /// Number of configured device secrets, reported by `/health`.
    pub secrets_configured: usize,
}
