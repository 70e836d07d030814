//! In-memory implementation of CommunityRepository
//!
//! Backs the `memory` storage backend and the test suites. Every mutation
//! happens under one write lock, so the name check and both inserts are a
//! single atomic step.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use forum_core::entities::{Community, Membership};
use forum_core::error::DomainError;
use forum_core::traits::{CommunityRepository, RepoResult};
use forum_core::value_objects::Snowflake;

#[derive(Debug, Default)]
struct State {
    communities: HashMap<Snowflake, Community>,
    /// name -> id, enforces name uniqueness
    names: HashMap<String, Snowflake>,
    memberships: Vec<Membership>,
}

/// Process-local community store
#[derive(Debug, Default)]
pub struct InMemoryCommunityRepository {
    state: RwLock<State>,
}

impl InMemoryCommunityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored communities
    pub fn community_count(&self) -> usize {
        self.state.read().communities.len()
    }

    /// Number of stored memberships across all communities
    pub fn membership_count(&self) -> usize {
        self.state.read().memberships.len()
    }
}

#[async_trait]
impl CommunityRepository for InMemoryCommunityRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>> {
        Ok(self.state.read().communities.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Community>> {
        let state = self.state.read();
        Ok(state
            .names
            .get(name)
            .and_then(|id| state.communities.get(id))
            .cloned())
    }

    #[instrument(skip(self, community, membership), fields(name = %community.name))]
    async fn create_with_membership(
        &self,
        community: &Community,
        membership: &Membership,
    ) -> RepoResult<()> {
        let mut state = self.state.write();

        if state.names.contains_key(&community.name) {
            return Err(DomainError::CommunityNameTaken);
        }
        if state.communities.contains_key(&community.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate community id {}",
                community.id
            )));
        }
        if membership.community_id != community.id
            && !state.communities.contains_key(&membership.community_id)
        {
            return Err(DomainError::DatabaseError(format!(
                "membership references unknown community {}",
                membership.community_id
            )));
        }
        if state.memberships.iter().any(|m| {
            m.user_id == membership.user_id && m.community_id == membership.community_id
        }) {
            return Err(DomainError::AlreadyMember);
        }

        state.names.insert(community.name.clone(), community.id);
        state.communities.insert(community.id, community.clone());
        state.memberships.push(membership.clone());

        Ok(())
    }

    async fn find_members(&self, community_id: Snowflake) -> RepoResult<Vec<Membership>> {
        let mut members: Vec<Membership> = self
            .state
            .read()
            .memberships
            .iter()
            .filter(|m| m.community_id == community_id)
            .cloned()
            .collect();
        members.sort_by(|a, b| {
            a.joined_at
                .cmp(&b.joined_at)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(members)
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
