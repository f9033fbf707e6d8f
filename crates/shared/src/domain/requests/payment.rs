use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, IntoParams)]
pub struct MonthToDateRequest {
    pub member_uuid: Uuid,

    pub date: NaiveDate,
}
