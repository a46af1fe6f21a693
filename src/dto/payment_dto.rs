use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::payment::Payment;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePaymentPayload {
    pub paid_date: NaiveDate,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub amount: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub application_id: i64,
    pub paid_date: NaiveDate,
    pub amount: f64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        Self {
            id: value.id,
            application_id: value.application_id,
            paid_date: value.paid_date,
            amount: value.amount,
            note: value.note,
            created_at: value.created_at,
        }
    }
}
