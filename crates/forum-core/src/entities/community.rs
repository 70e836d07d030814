//! Community entity - a named forum users can belong to

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, UserId};

/// Community ("subreddit") entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: Snowflake,
    pub name: String,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    /// Create a new Community
    pub fn new(id: Snowflake, name: String, creator_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user created this community
    #[inline]
    pub fn is_creator(&self, user_id: &UserId) -> bool {
        &self.creator_id == user_id
    }
}
