use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub id: i32,
    pub member_uuid: Uuid,
    pub is_current: bool,
    pub date_activated: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
}
