use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryRepositoryTrait {
    /// Resolve the card flagged current for a member. When several cards
    /// carry the flag, the most recently created one (highest id) wins.
    async fn find_current_for_member(
        &self,
        member_uuid: Uuid,
    ) -> Result<Option<CardModel>, RepositoryError>;
}
