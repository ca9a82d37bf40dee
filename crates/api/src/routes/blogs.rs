//! Route definitions for the blog content API.

use axum::routing::get;
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// Routes mounted at `/blogs`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /categories     -> list_categories
/// GET    /slug/{slug}    -> get_by_slug
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blogs::list).post(blogs::create))
        .route("/categories", get(blogs::list_categories))
        .route("/slug/{slug}", get(blogs::get_by_slug))
        .route(
            "/{id}",
            get(blogs::get_by_id)
                .put(blogs::update)
                .delete(blogs::delete),
        )
}
