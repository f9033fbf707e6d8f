use crate::model::card::CardModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    pub id: i32,
    pub member_uuid: Uuid,
    pub is_current: bool,
    pub date_activated: Option<NaiveDate>,
    pub created_at: Option<String>,
}

impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            id: model.id,
            member_uuid: model.member_uuid,
            is_current: model.is_current,
            date_activated: model.date_activated,
            created_at: model.created_at.map(|dt| dt.to_string()),
        }
    }
}
