use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted comment row. `id` and `created_at` are assigned by the
/// store; `updated_at` is set on the first successful update.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub comment: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A comment before persistence. Having no id field at all keeps the
/// create path from ever handing the store a preassigned id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewComment {
    pub user_id: i64,
    pub comment: String,
}
