use crate::{
    abstract_trait::member::repository::command::MemberCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateMemberRequest, errors::RepositoryError,
    model::member::MemberModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct MemberCommandRepository {
    db: ConnectionPool,
}

impl MemberCommandRepository {
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
impl MemberCommandRepositoryTrait for MemberCommandRepository {
    async fn create(
        &self,
        member_uuid: Uuid,
        req: &CreateMemberRequest,
    ) -> Result<MemberModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO members (
                member_uuid,
                first_name,
                last_name,
                address,
                email
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id,
                member_uuid,
                first_name,
                last_name,
                address,
                email,
                created_at
        "#;

        let record = sqlx::query_as::<_, MemberModel>(sql)
            .bind(member_uuid)
            .bind(&req.first_name)
            .bind(&req.last_name)
            .bind(&req.address)
            .bind(&req.email)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create member: {e:?}");
                RepositoryError::from_insert_error(e, "member already exists")
            })?;

        Ok(record)
    }
}
