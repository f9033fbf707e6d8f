use crate::{
    abstract_trait::transaction::repository::command::TransactionCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateTransactionRequest, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO transactions (
                card_id,
                amount,
                merchant,
                category,
                transaction_date
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id,
                card_id,
                amount,
                merchant,
                category,
                transaction_date,
                created_at
        "#;

        let record = sqlx::query_as::<_, TransactionModel>(sql)
            .bind(req.card_id)
            .bind(req.amount)
            .bind(&req.merchant)
            .bind(&req.category)
            .bind(req.transaction_date)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create transaction: {e:?}");
                RepositoryError::from_insert_error(e, "no such card")
            })?;

        Ok(record)
    }
}
