//! In-process `CodeStore` with the same upsert and ordering rules as PostgreSQL.
//! Backs the test suite.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::codes::CodeStore;
use crate::database::models::{CodeRecord, CodeSummary};

type Key = (String, String);

#[derive(Default)]
pub struct MemoryCodeStore {
    records: RwLock<HashMap<Key, CodeRecord>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all owners.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Full record lookup, including metadata not exposed through `CodeStore`.
    pub async fn record(&self, owner_id: &str, name: &str) -> Option<CodeRecord> {
        self.records
            .read()
            .await
            .get(&(owner_id.to_string(), name.to_string()))
            .cloned()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn upsert(
        &self,
        owner_id: &str,
        owner_name: &str,
        name: &str,
        payload: &str,
    ) -> anyhow::Result<()> {
        let mut records = self.records.write().await;
        records
            .entry((owner_id.to_string(), name.to_string()))
            .and_modify(|r| {
                r.owner_name = owner_name.to_string();
                r.payload = payload.to_string();
            })
            .or_insert_with(|| CodeRecord {
                owner_id: owner_id.to_string(),
                owner_name: owner_name.to_string(),
                name: name.to_string(),
                payload: payload.to_string(),
                created_at: Utc::now(),
            });
        Ok(())
    }

    async fn find(&self, owner_id: &str, name: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .records
            .read()
            .await
            .get(&(owner_id.to_string(), name.to_string()))
            .map(|r| r.payload.clone()))
    }

    async fn list(&self, owner_id: &str) -> anyhow::Result<Vec<CodeSummary>> {
        let records = self.records.read().await;
        let mut out: Vec<CodeSummary> = records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .map(CodeSummary::from)
            .collect();
        out.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(out)
    }
}
