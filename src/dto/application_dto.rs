use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::application::Application;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplicationPayload {
    pub candidate_id: i64,
    pub vacancy_id: i64,
    pub recruiter_id: i64,
    pub date_contacted: NaiveDate,
    pub status: Option<String>,
    pub rejection_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,

    // Optional quick payment creation alongside the application itself.
    #[serde(default)]
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub payment_amount: f64,

    #[serde(default)]
    pub is_replacement: bool,
    pub replacement_of_id: Option<i64>,
    pub replacement_note: Option<String>,
}

/// Sparse update: absent fields keep their stored value. The payment cache
/// fields and the three foreign keys are not part of this payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateApplicationPayload {
    pub date_contacted: Option<NaiveDate>,
    pub status: Option<String>,
    pub rejection_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub is_replacement: Option<bool>,
    pub replacement_of_id: Option<i64>,
    pub replacement_note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
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

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            candidate_id: value.candidate_id,
            vacancy_id: value.vacancy_id,
            recruiter_id: value.recruiter_id,
            date_contacted: value.date_contacted,
            status: value.status,
            rejection_date: value.rejection_date,
            start_date: value.start_date,
            paid: value.paid,
            paid_date: value.paid_date,
            payment_amount: value.payment_amount,
            is_replacement: value.is_replacement,
            replacement_of_id: value.replacement_of_id,
            replacement_note: value.replacement_note,
            created_at: value.created_at,
        }
    }
}
