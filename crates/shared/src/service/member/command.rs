use crate::{
    abstract_trait::member::{
        repository::command::DynMemberCommandRepository,
        service::command::MemberCommandServiceTrait,
    },
    domain::{
        requests::CreateMemberRequest,
        responses::{ApiResponse, MemberCreatedResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct MemberCommandService {
    command: DynMemberCommandRepository,
}

impl MemberCommandService {
    pub async fn new(command: DynMemberCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl MemberCommandServiceTrait for MemberCommandService {
    async fn create(
        &self,
        req: &CreateMemberRequest,
    ) -> Result<ApiResponse<MemberCreatedResponse>, ServiceError> {
        let member_uuid = Uuid::new_v4();

        info!(
            "📝 Creating member {} {} with UUID {member_uuid}",
            req.first_name, req.last_name
        );

        let member = self.command.create(member_uuid, req).await.map_err(|e| {
            error!("❌ Failed to create member: {e}");
            ServiceError::from(e)
        })?;

        info!("✅ Created member with UUID: {}", member.member_uuid);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member created successfully".to_string(),
            data: MemberCreatedResponse::from(member),
        })
    }
}
