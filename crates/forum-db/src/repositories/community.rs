//! PostgreSQL implementation of CommunityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Community, Membership};
use forum_core::error::DomainError;
use forum_core::traits::{CommunityRepository, RepoResult};
use forum_core::value_objects::Snowflake;

use crate::models::{CommunityModel, MembershipModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    /// Create a new PgCommunityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, creator_id, created_at, updated_at
            FROM communities
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Community>> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, creator_id, created_at, updated_at
            FROM communities
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self, community, membership), fields(name = %community.name))]
    async fn create_with_membership(
        &self,
        community: &Community,
        membership: &Membership,
    ) -> RepoResult<()> {
        // Dropping the transaction without commit rolls back the community row
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO communities (id, name, creator_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(community.id.into_inner())
        .bind(&community.name)
        .bind(community.creator_id.as_str())
        .bind(community.created_at)
        .bind(community.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CommunityNameTaken))?;

        sqlx::query(
            r"
            INSERT INTO memberships (user_id, community_id, joined_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(membership.user_id.as_str())
        .bind(membership.community_id.into_inner())
        .bind(membership.joined_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_members(&self, community_id: Snowflake) -> RepoResult<Vec<Membership>> {
        let results = sqlx::query_as::<_, MembershipModel>(
            r"
            SELECT user_id, community_id, joined_at
            FROM memberships
            WHERE community_id = $1
            ORDER BY joined_at ASC, user_id ASC
            ",
        )
        .bind(community_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Membership::from).collect())
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommunityRepository>();
    }
}
