//! History stores — one capability, two backends, never merged.
//!
//! Anonymous callers share the in-process bounded store; identified callers
//! get a Postgres-backed handle scoped to their rows. An identity without a
//! configured record store degrades to warned no-ops instead of silently
//! landing in the anonymous list.

pub mod db;
pub mod handlers;
pub mod local;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::explain::tone::Tone;
use crate::history::db::PgHistory;
use crate::history::local::LocalHistory;
use crate::models::history::HistoryEntry;

/// Hard cap on stored local entries and on any listed page.
pub const HISTORY_CAP: usize = 50;

/// A new record headed for whichever store the caller's identity selects.
#[derive(Debug, Clone)]
pub struct NewExplanation {
    pub code: String,
    pub tone: Tone,
    pub explanation: String,
}

/// The history capability. Each backend scopes entries its own way: the
/// local store by process, the Postgres store by caller identity.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, new: NewExplanation) -> Result<HistoryEntry, AppError>;
    /// Newest first.
    async fn list(&self, limit: usize) -> Result<Vec<HistoryEntry>, AppError>;
    async fn latest(&self) -> Result<Option<HistoryEntry>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<HistoryEntry>, AppError>;
    /// Returns whether an entry existed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Store selector carried in `AppState`.
#[derive(Clone)]
pub struct HistoryStores {
    pool: Option<PgPool>,
    local: Arc<LocalHistory>,
}

impl HistoryStores {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self {
            pool,
            local: Arc::new(LocalHistory::new(HISTORY_CAP)),
        }
    }

    /// Selects the store for a caller identity.
    pub fn select(&self, user_id: Option<Uuid>) -> Arc<dyn HistoryStore> {
        match (user_id, &self.pool) {
            (Some(user_id), Some(pool)) => Arc::new(PgHistory::new(pool.clone(), user_id)),
            (Some(user_id), None) => {
                warn!("no record store configured; history disabled for user {user_id}");
                Arc::new(UnconfiguredHistory)
            }
            (None, _) => self.local.clone(),
        }
    }
}

/// Stand-in for an identified caller when no record store is configured.
/// Writes report a persistence error, reads come back empty.
struct UnconfiguredHistory;

#[async_trait]
impl HistoryStore for UnconfiguredHistory {
    async fn append(&self, _new: NewExplanation) -> Result<HistoryEntry, AppError> {
        Err(AppError::Persistence(
            "record store not configured".to_string(),
        ))
    }

    async fn list(&self, _limit: usize) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(Vec::new())
    }

    async fn latest(&self) -> Result<Option<HistoryEntry>, AppError> {
        Ok(None)
    }

    async fn get(&self, _id: Uuid) -> Result<Option<HistoryEntry>, AppError> {
        Ok(None)
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, AppError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identity_without_record_store_degrades_to_noops() {
        let stores = HistoryStores::new(None);
        let store = stores.select(Some(Uuid::new_v4()));

        let err = store
            .append(NewExplanation {
                code: "fn main() {}".to_string(),
                tone: Tone::Baby,
                explanation: "it runs".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));

        assert!(store.list(HISTORY_CAP).await.unwrap().is_empty());
        assert!(store.latest().await.unwrap().is_none());
        assert!(!store.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_anonymous_callers_share_the_local_store() {
        let stores = HistoryStores::new(None);

        stores
            .select(None)
            .append(NewExplanation {
                code: "let x = 1;".to_string(),
                tone: Tone::Professor,
                explanation: "binds x".to_string(),
            })
            .await
            .unwrap();

        // A second anonymous selection sees the same entries.
        let entries = stores.select(None).list(HISTORY_CAP).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, "let x = 1;");
    }
}
