use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An individual payment received for an application. Several partial
/// payments may belong to the same application; rows are inserted and
/// deleted, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub application_id: i64,
    pub paid_date: NaiveDate,
    pub amount: f64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
