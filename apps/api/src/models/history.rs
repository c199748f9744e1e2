use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::explain::tone::Tone;

/// One saved explanation as the API presents it. The raw completion is
/// stored verbatim; parsed sections are derived on read, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub code: String,
    pub tone: Tone,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape of the `explanations` table. Tone is stored as text and
/// converted at the boundary; an unrecognized stored value falls back to the
/// default tone rather than failing the read.
#[derive(Debug, Clone, FromRow)]
pub struct ExplanationRow {
    pub id: Uuid,
    pub code: String,
    pub tone: String,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

impl From<ExplanationRow> for HistoryEntry {
    fn from(row: ExplanationRow) -> Self {
        HistoryEntry {
            id: row.id,
            code: row.code,
            tone: Tone::parse(&row.tone).unwrap_or_default(),
            explanation: row.explanation,
            created_at: row.created_at,
        }
    }
}
