//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Community, Membership};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Find community by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>>;

    /// Find community by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Community>>;

    /// Atomically insert a community together with its creator's membership.
    ///
    /// Either both rows exist afterwards or neither does. A name collision
    /// detected by the store fails with `DomainError::CommunityNameTaken`.
    async fn create_with_membership(
        &self,
        community: &Community,
        membership: &Membership,
    ) -> RepoResult<()>;

    /// List memberships of a community, oldest first
    async fn find_members(&self, community_id: Snowflake) -> RepoResult<Vec<Membership>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
