//! Repository for the `articles` table and its tag relation.
//!
//! Tag assignments live in the `article_tags` join table; `set_tags`
//! replaces the full set atomically.

use qazyna_core::error::CoreError;
use qazyna_core::interesting::MAX_TITLE_LEN;
use qazyna_core::slug::resolve_slug;
use qazyna_core::types::DbId;
use qazyna_core::validate::{optional_max_chars, require_non_blank, require_text, MAX_PATH_LEN};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::models::interesting_tag::InterestingTag;

/// Column list for articles queries.
const COLUMNS: &str = "id, title, slug, description, thumbnail, content, \
    author, reading_time_minutes, is_published, views, created_at, updated_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    fn validate_create(input: &CreateArticle) -> Result<(), CoreError> {
        require_text("title", &input.title, MAX_TITLE_LEN)?;
        require_non_blank("description", &input.description)?;
        require_non_blank("content", &input.content)?;
        require_text("author", &input.author, MAX_TITLE_LEN)?;
        optional_max_chars("thumbnail", input.thumbnail.as_deref(), MAX_PATH_LEN)?;
        if let Some(minutes) = input.reading_time_minutes {
            if minutes <= 0 {
                return Err(CoreError::Validation(
                    "reading_time_minutes must be positive".into(),
                ));
            }
        }
        Ok(())
    }

    fn validate_update(input: &UpdateArticle) -> Result<(), CoreError> {
        optional_max_chars("title", input.title.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("author", input.author.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("thumbnail", input.thumbnail.as_deref(), MAX_PATH_LEN)?;
        if let Some(minutes) = input.reading_time_minutes {
            if minutes <= 0 {
                return Err(CoreError::Validation(
                    "reading_time_minutes must be positive".into(),
                ));
            }
        }
        Ok(())
    }

    /// Create a new article, returning the created row. A duplicate slug
    /// within this table fails with a conflict error.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> DbResult<Article> {
        Self::validate_create(input)?;
        let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
        let query = format!(
            "INSERT INTO articles
                (title, slug, description, thumbnail, content, author,
                 reading_time_minutes, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 5), $8)
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.reading_time_minutes)
            .bind(input.is_published.unwrap_or(true))
            .fetch_one(pool)
            .await?;
        tracing::debug!(article_id = article.id, slug = %article.slug, "Created article");
        Ok(article)
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Article>> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(article)
    }

    /// Find an article by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<Article>> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE slug = $1");
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(article)
    }

    /// List articles, newest first, optionally only published ones.
    pub async fn list(
        pool: &PgPool,
        is_published: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> DbResult<Vec<Article>> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE ($1::BOOL IS NULL OR is_published = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let articles = sqlx::query_as::<_, Article>(&query)
            .bind(is_published)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(articles)
    }

    /// Update an article. Omitted fields are left unchanged; the slug is
    /// not part of the update column set.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateArticle) -> DbResult<Article> {
        Self::validate_update(input)?;
        let query = format!(
            "UPDATE articles SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                thumbnail = COALESCE($3, thumbnail),
                content = COALESCE($4, content),
                author = COALESCE($5, author),
                reading_time_minutes = COALESCE($6, reading_time_minutes),
                is_published = COALESCE($7, is_published),
                updated_at = NOW()
             WHERE id = $8
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.reading_time_minutes)
            .bind(input.is_published)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Article",
                id,
            })?;
        Ok(article)
    }

    /// Increment the view counter, returning the new count.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> DbResult<i32> {
        let views: Option<(i32,)> =
            sqlx::query_as("UPDATE articles SET views = views + 1 WHERE id = $1 RETURNING views")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        views.map(|(v,)| v).ok_or_else(|| {
            CoreError::NotFound {
                entity: "Article",
                id,
            }
            .into()
        })
    }

    /// Delete an article by ID. Join-table rows are removed by the
    /// `ON DELETE CASCADE` foreign keys.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Article",
                id,
            }
            .into());
        }
        Ok(())
    }

    // -- Tag relation --------------------------------------------------------

    /// Replace the article's tag set with the given tag IDs.
    pub async fn set_tags(pool: &PgPool, article_id: DbId, tag_ids: &[DbId]) -> DbResult<()> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await?;
        for tag_id in tag_ids {
            sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)")
                .bind(article_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// List the tags attached to an article, ordered by name.
    pub async fn tags_for_article(pool: &PgPool, article_id: DbId) -> DbResult<Vec<InterestingTag>> {
        let tags = sqlx::query_as::<_, InterestingTag>(
            "SELECT t.id, t.name, t.slug
             FROM interesting_tags t
             JOIN article_tags rel ON rel.tag_id = t.id
             WHERE rel.article_id = $1
             ORDER BY t.name",
        )
        .bind(article_id)
        .fetch_all(pool)
        .await?;
        Ok(tags)
    }

    /// List published articles carrying the tag with the given slug,
    /// newest first.
    pub async fn list_by_tag_slug(pool: &PgPool, tag_slug: &str) -> DbResult<Vec<Article>> {
        let articles = sqlx::query_as::<_, Article>(
            "SELECT a.id, a.title, a.slug, a.description, a.thumbnail, a.content,
                    a.author, a.reading_time_minutes, a.is_published, a.views,
                    a.created_at, a.updated_at
             FROM articles a
             JOIN article_tags rel ON rel.article_id = a.id
             JOIN interesting_tags t ON t.id = rel.tag_id
             WHERE t.slug = $1 AND a.is_published = TRUE
             ORDER BY a.created_at DESC",
        )
            .bind(tag_slug)
            .fetch_all(pool)
            .await?;
        Ok(articles)
    }
}
