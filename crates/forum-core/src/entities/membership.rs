//! Membership entity - links a user to a community they follow

use chrono::{DateTime, Utc};

use crate::entities::Community;
use crate::value_objects::{Snowflake, UserId};

/// Membership entity (junction between a user and a Community)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub user_id: UserId,
    pub community_id: Snowflake,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    /// Create a new Membership
    pub fn new(user_id: UserId, community_id: Snowflake) -> Self {
        Self {
            user_id,
            community_id,
            joined_at: Utc::now(),
        }
    }

    /// The membership every community starts with: its creator
    pub fn for_creator(community: &Community) -> Self {
        Self {
            user_id: community.creator_id.clone(),
            community_id: community.id,
            joined_at: community.created_at,
        }
    }
}
