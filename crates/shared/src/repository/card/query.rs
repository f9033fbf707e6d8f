use crate::{
    abstract_trait::card::repository::query::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
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
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_current_for_member(
        &self,
        member_uuid: Uuid,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // Nothing stops a member from holding several cards flagged
        // current; the highest id (most recently issued) wins.
        let sql = r#"
            SELECT
                c.id,
                c.member_uuid,
                c.is_current,
                c.date_activated,
                c.created_at
            FROM cards c
            WHERE c.member_uuid = $1
              AND c.is_current = TRUE
            ORDER BY c.id DESC
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, CardModel>(sql)
            .bind(member_uuid)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch current card for member {member_uuid}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(row)
    }
}
