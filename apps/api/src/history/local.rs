//! In-process bounded history for anonymous callers.
//!
//! A bounded FIFO: appends go to the back and the oldest entry is evicted on
//! overflow. Insertion order is the only eviction signal — this is not an
//! LRU, and reads never reorder anything.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::{HistoryStore, NewExplanation};
use crate::models::history::HistoryEntry;

pub struct LocalHistory {
    cap: usize,
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl LocalHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: Mutex::new(VecDeque::with_capacity(cap)),
        }
    }

    // Std mutex: critical sections are short and never held across awaits.
    // A poisoned lock still holds valid data, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl HistoryStore for LocalHistory {
    async fn append(&self, new: NewExplanation) -> Result<HistoryEntry, AppError> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            code: new.code,
            tone: new.tone,
            explanation: new.explanation,
            created_at: Utc::now(),
        };

        let mut entries = self.lock();
        entries.push_back(entry.clone());
        while entries.len() > self.cap {
            entries.pop_front();
        }

        Ok(entry)
    }

    async fn list(&self, limit: usize) -> Result<Vec<HistoryEntry>, AppError> {
        let entries = self.lock();
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    async fn latest(&self) -> Result<Option<HistoryEntry>, AppError> {
        Ok(self.lock().back().cloned())
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryEntry>, AppError> {
        Ok(self.lock().iter().find(|entry| entry.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut entries = self.lock();
        match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::tone::Tone;

    fn new_explanation(n: usize) -> NewExplanation {
        NewExplanation {
            code: format!("let x = {n};"),
            tone: Tone::Baby,
            explanation: format!("binds x to {n}"),
        }
    }

    #[tokio::test]
    async fn test_fifty_one_appends_keep_the_fifty_most_recent() {
        let store = LocalHistory::new(50);
        for n in 0..51 {
            store.append(new_explanation(n)).await.unwrap();
        }

        let entries = store.list(100).await.unwrap();
        assert_eq!(entries.len(), 50);
        // Newest first; entry 0 was evicted.
        assert_eq!(entries[0].code, "let x = 50;");
        assert_eq!(entries[49].code, "let x = 1;");
    }

    #[tokio::test]
    async fn test_eviction_is_insertion_order_not_access_order() {
        let store = LocalHistory::new(2);
        let first = store.append(new_explanation(1)).await.unwrap();
        store.append(new_explanation(2)).await.unwrap();

        // Reading the oldest entry must not protect it from eviction.
        assert!(store.get(first.id).await.unwrap().is_some());
        store.append(new_explanation(3)).await.unwrap();

        assert!(store.get(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_respects_limit() {
        let store = LocalHistory::new(50);
        for n in 0..5 {
            store.append(new_explanation(n)).await.unwrap();
        }

        let entries = store.list(3).await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].code, "let x = 4;");
        assert_eq!(entries[2].code, "let x = 2;");
    }

    #[tokio::test]
    async fn test_latest_returns_most_recent_append() {
        let store = LocalHistory::new(50);
        assert!(store.latest().await.unwrap().is_none());

        store.append(new_explanation(1)).await.unwrap();
        let last = store.append(new_explanation(2)).await.unwrap();

        assert_eq!(store.latest().await.unwrap().unwrap().id, last.id);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_the_entry_existed() {
        let store = LocalHistory::new(50);
        let entry = store.append(new_explanation(1)).await.unwrap();

        assert!(store.delete(entry.id).await.unwrap());
        assert!(!store.delete(entry.id).await.unwrap());
        assert!(store.get(entry.id).await.unwrap().is_none());
    }
}
