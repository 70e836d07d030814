//! Community service
//!
//! Handles community creation. The creator becomes the first member in the
//! same storage transaction that creates the community.

use forum_core::entities::{Community, Membership};
use forum_core::{DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::CreateCommunityRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a community owned by `creator` and subscribe the creator to it
    ///
    /// The request is expected to be validated already.
    ///
    /// # Errors
    /// - `ServiceError::Conflict` if a community with this exact name exists
    /// - `ServiceError::Domain` for storage failures
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_community(
        &self,
        creator: UserId,
        request: CreateCommunityRequest,
    ) -> ServiceResult<Community> {
        // Fast path; the storage constraint below is what actually guarantees uniqueness
        if self
            .ctx
            .community_repo()
            .find_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(name_taken());
        }

        let community = Community::new(self.ctx.generate_id(), request.name, creator);
        let membership = Membership::for_creator(&community);

        self.ctx
            .community_repo()
            .create_with_membership(&community, &membership)
            .await
            .map_err(|e| match e {
                DomainError::CommunityNameTaken => name_taken(),
                other => ServiceError::Domain(other),
            })?;

        info!(
            community_id = %community.id,
            creator_id = %community.creator_id,
            name = %community.name,
            "Community created successfully"
        );

        Ok(community)
    }
}

fn name_taken() -> ServiceError {
    ServiceError::conflict(DomainError::CommunityNameTaken.to_string())
}
