use crate::{domain::requests::CreateCardRequest, errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandRepositoryTrait {
    async fn create(&self, req: &CreateCardRequest) -> Result<CardModel, RepositoryError>;
}
