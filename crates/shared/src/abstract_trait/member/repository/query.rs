use crate::{errors::RepositoryError, model::member::MemberModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynMemberQueryRepository = Arc<dyn MemberQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MemberQueryRepositoryTrait {
    async fn find_by_uuid(&self, member_uuid: Uuid) -> Result<MemberModel, RepositoryError>;
}
