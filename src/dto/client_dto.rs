use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientPayload {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}
