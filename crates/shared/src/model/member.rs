use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MemberModel {
    pub id: i32,
    pub member_uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
