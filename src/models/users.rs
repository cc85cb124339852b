use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Minimal user row. The comment service only ever asks whether a row
/// with a given id exists; no other field is interpreted.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<FixedOffset>,
}
