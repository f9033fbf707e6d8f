use crate::model::member::MemberModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i32,
    pub member_uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberCreatedResponse {
    pub member_uuid: Uuid,
}

impl From<MemberModel> for MemberResponse {
    fn from(model: MemberModel) -> Self {
        Self {
            id: model.id,
            member_uuid: model.member_uuid,
            first_name: model.first_name,
            last_name: model.last_name,
            address: model.address,
            email: model.email,
            created_at: model.created_at.map(|dt| dt.to_string()),
        }
    }
}

impl From<MemberModel> for MemberCreatedResponse {
    fn from(model: MemberModel) -> Self {
        Self {
            member_uuid: model.member_uuid,
        }
    }
}
