//! Runs `PgCodeStore` against a real PostgreSQL when `DATABASE_URL` is set;
//! each test skips otherwise. Owner ids are unique per run so a shared
//! database stays usable.

use std::time::Duration;

use chrono::{DateTime, Utc};
use codekeeper_bot::database::codes::{self, CodeStore};
use codekeeper_bot::database::init::{self, DbPool};
use codekeeper_bot::database::PgCodeStore;

async fn connect() -> Option<DbPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping PostgreSQL store test");
        return None;
    };
    Some(init::connect(&url).await.expect("database reachable and migrated"))
}

fn owner(tag: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("test-{}-{}-{}", tag, std::process::id(), nanos)
}

/// (owner_name, payload, created_at)
type Row = (String, String, DateTime<Utc>);

async fn rows_for(pool: &DbPool, owner_id: &str, name: &str) -> Vec<Row> {
    sqlx::query_as::<_, Row>(
        "SELECT owner_name, payload, created_at FROM codes WHERE owner_id = $1 AND name = $2",
    )
    .bind(owner_id)
    .bind(name)
    .fetch_all(pool)
    .await
    .unwrap()
}

#[tokio::test]
async fn upsert_replaces_payload_and_keeps_created_at() {
    let Some(pool) = connect().await else { return };
    let store = PgCodeStore::new(pool.clone());
    let owner_id = owner("upsert");

    assert!(codes::save(&store, &owner_id, "alice", "greeting", "aGVsbG8=").await);
    let before = rows_for(&pool, &owner_id, "greeting").await;
    assert_eq!(before.len(), 1);

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(codes::save(&store, &owner_id, "alice2", "greeting", "Ynll").await);

    let after = rows_for(&pool, &owner_id, "greeting").await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].0, "alice2");
    assert_eq!(after[0].1, "Ynll");
    assert_eq!(after[0].2, before[0].2);
}

#[tokio::test]
async fn find_is_scoped_to_owner() {
    let Some(pool) = connect().await else { return };
    let store = PgCodeStore::new(pool);
    let owner_a = owner("scope-a");
    let owner_b = owner("scope-b");

    store.upsert(&owner_b, "bob", "shared", "Ym9i").await.unwrap();

    assert_eq!(store.find(&owner_a, "shared").await.unwrap(), None);
    assert_eq!(
        store.find(&owner_b, "shared").await.unwrap().as_deref(),
        Some("Ym9i")
    );
    assert!(store.list(&owner_a).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_creation_then_name() {
    let Some(pool) = connect().await else { return };
    let store = PgCodeStore::new(pool);
    let owner_id = owner("list");

    for name in ["zeta", "alpha", "mid"] {
        store.upsert(&owner_id, "alice", name, "YQ==").await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    // Overwrite must not move the first record.
    store.upsert(&owner_id, "alice", "zeta", "Yg==").await.unwrap();

    let names: Vec<String> = store
        .list(&owner_id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}
