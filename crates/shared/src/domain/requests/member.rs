use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, IntoParams)]
pub struct FindMemberRequest {
    pub member_uuid: Uuid,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 64, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(max = 64, message = "Address is too long"))]
    pub address: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}
