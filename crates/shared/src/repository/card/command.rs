use crate::{
    abstract_trait::card::repository::command::CardCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateCardRequest, errors::RepositoryError,
    model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
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
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn create(&self, req: &CreateCardRequest) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO cards (
                member_uuid,
                is_current,
                date_activated
            )
            VALUES ($1, $2, $3)
            RETURNING
                id,
                member_uuid,
                is_current,
                date_activated,
                created_at
        "#;

        let record = sqlx::query_as::<_, CardModel>(sql)
            .bind(req.member_uuid)
            .bind(req.is_current)
            .bind(req.date_activated)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create card: {e:?}");
                RepositoryError::from_insert_error(e, "no such member")
            })?;

        Ok(record)
    }
}
