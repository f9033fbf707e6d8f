use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::Row;
use tracing::error;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
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
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_by_card_in_window(
        &self,
        card_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                t.id,
                t.card_id,
                t.amount,
                t.merchant,
                t.category,
                t.transaction_date,
                t.created_at
            FROM transactions t
            WHERE t.card_id = $1
              AND t.transaction_date BETWEEN $2 AND $3
            ORDER BY t.transaction_date, t.id
        "#;

        let rows = sqlx::query_as::<_, TransactionModel>(sql)
            .bind(card_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch transactions for card {card_id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(rows)
    }

    async fn sum_amounts_in_window(
        &self,
        card_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT COALESCE(SUM(t.amount), 0)::NUMERIC(14, 2) AS total_amount
            FROM transactions t
            WHERE t.card_id = $1
              AND t.transaction_date BETWEEN $2 AND $3
        "#;

        let row = sqlx::query(sql)
            .bind(card_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in sum_amounts_in_window for card {card_id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        let total_amount: Decimal = row.try_get("total_amount")?;

        Ok(total_amount)
    }
}
