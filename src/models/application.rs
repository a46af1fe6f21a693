use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One candidate's progression on one vacancy, handled by one recruiter.
///
/// `paid`, `paid_date` and `payment_amount` are a cache over the payments
/// table, maintained exclusively by the payment cache recompute; they are
/// never written from request payloads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub candidate_id: i64,
    pub vacancy_id: i64,
    pub recruiter_id: i64,

    pub date_contacted: NaiveDate,
    pub status: String,
    pub rejection_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,

    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
    pub payment_amount: f64,

    pub is_replacement: bool,
    pub replacement_of_id: Option<i64>,
    pub replacement_note: Option<String>,

    pub created_at: DateTime<Utc>,
}
