//! Repository for the `blogs` table.

use devfolio_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use devfolio_core::post::DEFAULT_AUTHOR;
use devfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, excerpt, content, author, category, tags, \
    featured_image, published, created_at, updated_at";

/// Provides CRUD operations for blog posts.
///
/// Slug uniqueness is enforced by the `uq_blogs_slug` unique index, so a
/// concurrent duplicate create fails inside PostgreSQL rather than racing
/// a check-then-insert in application code.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// List posts newest-first, optionally filtered by `published` and/or
    /// `category` (combined with AND).
    ///
    /// `limit` defaults to 10 (max 100); `offset` defaults to 0. An offset
    /// past the end of the table yields an empty page, not an error.
    pub async fn list(
        pool: &PgPool,
        filter: &BlogPostFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);

        let query = format!(
            "SELECT {COLUMNS} FROM blogs \
             WHERE ($1::BOOLEAN IS NULL OR published = $1) \
               AND ($2::TEXT IS NULL OR category = $2) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(filter.published)
            .bind(filter.category.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug. Exact match, case-sensitive.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new post, returning the created row.
    ///
    /// `slug` is passed separately because the handler resolves it (client
    /// value or derived from the title). Author, tags, and published fall
    /// back to their defaults when omitted. A duplicate slug surfaces as a
    /// unique-constraint violation on `uq_blogs_slug`.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs \
                (title, slug, excerpt, content, author, category, tags, \
                 featured_image, published) \
             VALUES ($1, $2, $3, $4, COALESCE($5, $6), $7, \
                     COALESCE($8, ARRAY[]::TEXT[]), $9, COALESCE($10, FALSE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.author)
            .bind(DEFAULT_AUTHOR)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(&input.featured_image)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Replace a post's editable fields and refresh `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        slug: &str,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET \
                title = $2, \
                slug = $3, \
                excerpt = $4, \
                content = $5, \
                author = COALESCE($6, $7), \
                category = $8, \
                tags = COALESCE($9, ARRAY[]::TEXT[]), \
                featured_image = $10, \
                published = COALESCE($11, FALSE), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.author)
            .bind(DEFAULT_AUTHOR)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(&input.featured_image)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct non-null categories across all posts, unordered.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT category FROM blogs WHERE category IS NOT NULL")
            .fetch_all(pool)
            .await
    }
}
