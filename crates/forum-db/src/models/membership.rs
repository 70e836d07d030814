//! Membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for memberships table
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub user_id: String,
    pub community_id: i64,
    pub joined_at: DateTime<Utc>,
}
