use crate::{
    abstract_trait::member::repository::query::MemberQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::member::MemberModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct MemberQueryRepository {
    db: ConnectionPool,
}

impl MemberQueryRepository {
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
impl MemberQueryRepositoryTrait for MemberQueryRepository {
    async fn find_by_uuid(&self, member_uuid: Uuid) -> Result<MemberModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                m.id,
                m.member_uuid,
                m.first_name,
                m.last_name,
                m.address,
                m.email,
                m.created_at
            FROM members m
            WHERE m.member_uuid = $1
        "#;

        let row = sqlx::query_as::<_, MemberModel>(sql)
            .bind(member_uuid)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch member by UUID {member_uuid}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        match row {
            Some(member) => Ok(member),
            None => Err(RepositoryError::NotFound),
        }
    }
}
