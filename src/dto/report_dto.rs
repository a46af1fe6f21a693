use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineQuery {
    pub client_id: Option<i64>,
    pub recruiter_id: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

/// One application flattened with its candidate, recruiter, vacancy and
/// client context for the pipeline view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PipelineRow {
    pub id: i64,
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

    pub candidate_id: i64,
    pub candidate_name: String,

    pub recruiter_id: i64,
    pub recruiter_name: String,

    pub vacancy_id: i64,
    pub vacancy_title: String,
    pub vacancy_fee: f64,

    pub client_id: i64,
    pub client_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EarningsItem {
    pub payment_id: i64,
    pub paid_date: NaiveDate,
    pub amount: f64,
    pub candidate_name: String,
    pub client_name: String,
    pub vacancy_title: String,
    pub recruiter_name: String,
    pub application_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsReport {
    pub year: i32,
    pub month: u32,
    pub total: f64,
    pub items: Vec<EarningsItem>,
}
