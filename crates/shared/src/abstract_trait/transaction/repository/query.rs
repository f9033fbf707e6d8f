use crate::{errors::RepositoryError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_by_card_in_window(
        &self,
        card_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;

    /// Sum of transaction amounts on a card with dates in
    /// `[start_date, end_date]` inclusive. An empty set sums to 0.00.
    async fn sum_amounts_in_window(
        &self,
        card_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, RepositoryError>;
}
