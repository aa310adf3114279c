use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Validated creation payload. Carries everything a [`Rating`] has except the
/// id and timestamp, which the store stamps on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertRating {
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub message: String,
}
