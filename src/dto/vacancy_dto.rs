use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    pub client_id: i64,
    #[validate(length(min = 1, max = 180))]
    pub title: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fee_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub client_id: Option<i64>,
}
