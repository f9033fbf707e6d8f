use crate::{
    domain::requests::CreateMemberRequest, errors::RepositoryError, model::member::MemberModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynMemberCommandRepository = Arc<dyn MemberCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MemberCommandRepositoryTrait {
    async fn create(
        &self,
        member_uuid: Uuid,
        req: &CreateMemberRequest,
    ) -> Result<MemberModel, RepositoryError>;
}
