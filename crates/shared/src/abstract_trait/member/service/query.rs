use crate::{
    domain::{
        requests::FindMemberRequest,
        responses::{ApiResponse, MemberResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMemberQueryService = Arc<dyn MemberQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait MemberQueryServiceTrait {
    async fn find_by_uuid(
        &self,
        req: &FindMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError>;
}
