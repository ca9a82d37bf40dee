//! Route definitions for the compose generator tool.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::compose;
use crate::state::AppState;

/// Routes mounted at `/compose`.
///
/// ```text
/// GET  /templates    -> list_templates
/// POST /render       -> render
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(compose::list_templates))
        .route("/render", post(compose::render))
}
