pub mod health;
pub mod readings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /readings/evaluate                               evaluate a reading (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/readings", readings::router())
}
