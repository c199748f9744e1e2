//! Postgres-backed history for identified callers.
//!
//! Remote-paged over the `explanations` table. Every query is scoped by
//! `user_id`, delete included, so one caller can never touch another's rows.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::{HistoryStore, NewExplanation, HISTORY_CAP};
use crate::models::history::{ExplanationRow, HistoryEntry};

/// A per-request handle scoped to one caller's rows.
pub struct PgHistory {
    pool: PgPool,
    user_id: Uuid,
}

impl PgHistory {
    pub fn new(pool: PgPool, user_id: Uuid) -> Self {
        Self { pool, user_id }
    }
}

#[async_trait]
impl HistoryStore for PgHistory {
    async fn append(&self, new: NewExplanation) -> Result<HistoryEntry, AppError> {
        let row = sqlx::query_as::<_, ExplanationRow>(
            "INSERT INTO explanations (user_id, code, tone, explanation) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, code, tone, explanation, created_at",
        )
        .bind(self.user_id)
        .bind(&new.code)
        .bind(new.tone.as_str())
        .bind(&new.explanation)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self, limit: usize) -> Result<Vec<HistoryEntry>, AppError> {
        let rows = sqlx::query_as::<_, ExplanationRow>(
            "SELECT id, code, tone, explanation, created_at FROM explanations \
             WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(self.user_id)
        .bind(limit.min(HISTORY_CAP) as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoryEntry::from).collect())
    }

    async fn latest(&self) -> Result<Option<HistoryEntry>, AppError> {
        let row = sqlx::query_as::<_, ExplanationRow>(
            "SELECT id, code, tone, explanation, created_at FROM explanations \
             WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(self.user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(HistoryEntry::from))
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryEntry>, AppError> {
        let row = sqlx::query_as::<_, ExplanationRow>(
            "SELECT id, code, tone, explanation, created_at FROM explanations \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(self.user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(HistoryEntry::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM explanations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(self.user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
