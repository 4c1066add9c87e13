//! Connection pool construction and schema migration.

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

const MAX_CONNECTIONS: u32 = 5;

/// Connects to PostgreSQL and applies the embedded migrations.
/// Any failure here is fatal for the process.
pub async fn connect(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .context("failed to connect to the database")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;
    tracing::info!(target = "db", "connected and migrated");
    Ok(pool)
}
