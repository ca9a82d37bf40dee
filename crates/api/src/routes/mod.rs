pub mod blogs;
pub mod compose;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /blogs                      list, create
/// /blogs/categories           distinct category values
/// /blogs/slug/{slug}          lookup by slug
/// /blogs/{id}                 get, update, delete
///
/// /compose/templates          service template catalog
/// /compose/render             render a compose document (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/blogs", blogs::router())
        .nest("/compose", compose::router())
}
