use crate::{
    abstract_trait::card::{
        repository::command::DynCardCommandRepository, service::command::CardCommandServiceTrait,
    },
    domain::{
        requests::CreateCardRequest,
        responses::{ApiResponse, CardResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct CardCommandService {
    command: DynCardCommandRepository,
}

impl CardCommandService {
    pub async fn new(command: DynCardCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create(
        &self,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!(
            "💳 Issuing card for member {} (current: {})",
            req.member_uuid, req.is_current
        );

        let card = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create card for member {}: {e}", req.member_uuid);
            ServiceError::from(e)
        })?;

        info!("✅ Created card {} for member {}", card.id, card.member_uuid);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card created successfully".to_string(),
            data: CardResponse::from(card),
        })
    }
}
