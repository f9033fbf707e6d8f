use crate::{
    domain::{
        requests::CreateMemberRequest,
        responses::{ApiResponse, MemberCreatedResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMemberCommandService = Arc<dyn MemberCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait MemberCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateMemberRequest,
    ) -> Result<ApiResponse<MemberCreatedResponse>, ServiceError>;
}
