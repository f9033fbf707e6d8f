use crate::{
    abstract_trait::member::{
        repository::query::DynMemberQueryRepository, service::query::MemberQueryServiceTrait,
    },
    domain::{
        requests::FindMemberRequest,
        responses::{ApiResponse, MemberResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct MemberQueryService {
    query: DynMemberQueryRepository,
}

impl MemberQueryService {
    pub async fn new(query: DynMemberQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl MemberQueryServiceTrait for MemberQueryService {
    async fn find_by_uuid(
        &self,
        req: &FindMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError> {
        info!("🔍 Finding member by UUID: {}", req.member_uuid);

        let member = self.query.find_by_uuid(req.member_uuid).await.map_err(|e| {
            error!("❌ Failed to fetch member {}: {e}", req.member_uuid);
            ServiceError::from(e)
        })?;

        info!("✅ Found member with UUID: {}", req.member_uuid);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member retrieved successfully".to_string(),
            data: MemberResponse::from(member),
        })
    }
}
