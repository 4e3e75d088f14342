//! Route definitions for device readings.

use axum::routing::post;
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// POST   /evaluate          -> evaluate_reading
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/evaluate", post(readings::evaluate_reading))
}
