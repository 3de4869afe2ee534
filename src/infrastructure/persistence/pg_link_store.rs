//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{KeyedLink, Link};
use crate::domain::key::LinkKey;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// PostgreSQL store for links.
///
/// Schema lives in `migrations/`. Record keys are the `links.id` identity
/// column.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    author: String,
    slug: String,
    target: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for KeyedLink {
    fn from(row: LinkRow) -> Self {
        KeyedLink::new(
            LinkKey::new(row.id),
            Link::new(row.author, row.slug, row.target, row.created_at),
        )
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert(&self, link: Link) -> Result<LinkKey, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO links (author, slug, target, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&link.author)
        .bind(&link.slug)
        .bind(&link.target)
        .bind(link.date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(LinkKey::new(id))
    }

    async fn get(&self, key: LinkKey) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, author, slug, target, created_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(key.id())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| KeyedLink::from(r).link))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<KeyedLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, author, slug, target, created_at
            FROM links
            WHERE slug = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(KeyedLink::from))
    }

    async fn list(&self) -> Result<Vec<KeyedLink>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, author, slug, target, created_at
            FROM links
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(KeyedLink::from).collect())
    }

    async fn replace(&self, key: LinkKey, link: Link) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET author = $2, slug = $3, target = $4, created_at = $5
            WHERE id = $1
            "#,
        )
        .bind(key.id())
        .bind(&link.author)
        .bind(&link.slug)
        .bind(&link.target)
        .bind(link.date)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, key: LinkKey) -> Result<(), AppError> {
        sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(key.id())
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
