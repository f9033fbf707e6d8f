use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCardRequest {
    pub member_uuid: Uuid,

    #[serde(default)]
    pub is_current: bool,

    pub date_activated: Option<NaiveDate>,
}
