//! Persistence for saved codes.
//!
//! `CodeStore` is the seam the command handlers depend on. The free functions
//! `save`, `get` and `list` wrap it with the handler-facing contract: they never
//! return an error, they log it and fall back to `false`, `None` or an empty list.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::database::models::CodeSummary;

#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Insert or replace the record keyed by `(owner_id, name)`. On replace only
    /// `owner_name` and `payload` change.
    async fn upsert(
        &self,
        owner_id: &str,
        owner_name: &str,
        name: &str,
        payload: &str,
    ) -> anyhow::Result<()>;

    async fn find(&self, owner_id: &str, name: &str) -> anyhow::Result<Option<String>>;

    /// All records of one owner, ordered by creation time then name.
    async fn list(&self, owner_id: &str) -> anyhow::Result<Vec<CodeSummary>>;
}

pub struct PgCodeStore {
    pool: PgPool,
}

impl PgCodeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CodeStore for PgCodeStore {
    #[instrument(level = "debug", skip(self, payload))]
    async fn upsert(
        &self,
        owner_id: &str,
        owner_name: &str,
        name: &str,
        payload: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO codes (owner_id, owner_name, name, payload)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (owner_id, name)
            DO UPDATE SET owner_name = EXCLUDED.owner_name, payload = EXCLUDED.payload
            "#,
        )
        .bind(owner_id)
        .bind(owner_name)
        .bind(name)
        .bind(payload)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn find(&self, owner_id: &str, name: &str) -> anyhow::Result<Option<String>> {
        let payload = sqlx::query_scalar::<_, String>(
            "SELECT payload FROM codes WHERE owner_id = $1 AND name = $2",
        )
        .bind(owner_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(payload)
    }

    #[instrument(level = "debug", skip(self))]
    async fn list(&self, owner_id: &str) -> anyhow::Result<Vec<CodeSummary>> {
        let rows = sqlx::query_as::<_, CodeSummary>(
            r#"
            SELECT name, created_at
            FROM codes
            WHERE owner_id = $1
            ORDER BY created_at ASC, name ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Saves a code for `owner_id`. Returns false if the store failed.
pub async fn save(
    store: &dyn CodeStore,
    owner_id: &str,
    owner_name: &str,
    name: &str,
    payload: &str,
) -> bool {
    match store.upsert(owner_id, owner_name, name, payload).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                target = "store.save",
                owner_id = %owner_id,
                name = %name,
                error = ?e,
                "failed to save code"
            );
            false
        }
    }
}

/// Looks up one payload. Store errors are logged and reported as absent.
pub async fn get(store: &dyn CodeStore, owner_id: &str, name: &str) -> Option<String> {
    store.find(owner_id, name).await.unwrap_or_else(|e| {
        tracing::error!(
            target = "store.get",
            owner_id = %owner_id,
            name = %name,
            error = ?e,
            "failed to fetch code"
        );
        None
    })
}

pub async fn list(store: &dyn CodeStore, owner_id: &str) -> Vec<CodeSummary> {
    store.list(owner_id).await.unwrap_or_else(|e| {
        tracing::error!(
            target = "store.list",
            owner_id = %owner_id,
            error = ?e,
            "failed to list codes"
        );
        Vec::new()
    })
}
