//! Handlers for the blog content API.
//!
//! Thin request/response glue: validation lives in `devfolio_core::post`,
//! persistence in `devfolio_db::repositories::BlogPostRepo`. Slug
//! uniqueness is enforced by the database's unique index and surfaces as
//! a 409 via the sqlx error classifier.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use devfolio_core::error::CoreError;
use devfolio_core::post;
use devfolio_core::slug::slugify;
use devfolio_core::types::DbId;
use devfolio_db::models::post::{BlogPostFilter, CreateBlogPost, UpdateBlogPost};
use devfolio_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub published: Option<bool>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the slug for a write: the client's value, or derived from the title.
fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    let slug = match explicit {
        Some(s) => s.to_string(),
        None => slugify(title),
    };
    post::validate_slug(&slug)?;
    Ok(slug)
}

fn not_found(key: impl ToString) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Blog",
        key: key.to_string(),
    })
}

// ---------------------------------------------------------------------------
// GET /blogs
// ---------------------------------------------------------------------------

/// List posts newest-first with optional `published`/`category` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = BlogPostFilter {
        published: params.published,
        category: params.category,
    };
    let items = BlogPostRepo::list(&state.pool, &filter, params.limit, params.offset).await?;
    tracing::debug!(count = items.len(), "Listed posts");
    Ok(Json(DataResponse::new(items)))
}

// ---------------------------------------------------------------------------
// GET /blogs/categories
// ---------------------------------------------------------------------------

/// List the distinct non-null categories across all posts.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = BlogPostRepo::list_categories(&state.pool).await?;
    Ok(Json(DataResponse::new(categories)))
}

// ---------------------------------------------------------------------------
// GET /blogs/{id}
// ---------------------------------------------------------------------------

/// Get a single post by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(post)))
}

// ---------------------------------------------------------------------------
// GET /blogs/slug/{slug}
// ---------------------------------------------------------------------------

/// Get a single post by slug. Exact match, case-sensitive.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found(&slug))?;
    Ok(Json(DataResponse::new(post)))
}

// ---------------------------------------------------------------------------
// POST /blogs
// ---------------------------------------------------------------------------

/// Create a new post.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    post::validate_title(&input.title)?;
    post::validate_content(&input.content)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

    let created = BlogPostRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(id = created.id, slug = %created.slug, "Post created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

// ---------------------------------------------------------------------------
// PUT /blogs/{id}
// ---------------------------------------------------------------------------

/// Replace a post's editable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    post::validate_title(&input.title)?;
    post::validate_content(&input.content)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

    let updated = BlogPostRepo::update(&state.pool, id, &slug, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = updated.id, "Post updated");
    Ok(Json(DataResponse::new(updated)))
}

// ---------------------------------------------------------------------------
// DELETE /blogs/{id}
// ---------------------------------------------------------------------------

/// Delete a post by ID.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Post deleted");
        Ok(Json(MessageResponse::new("Blog deleted successfully")))
    } else {
        Err(not_found(id))
    }
}
