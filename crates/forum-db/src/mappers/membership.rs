//! Membership model -> entity mapper

use forum_core::entities::Membership;
use forum_core::value_objects::{Snowflake, UserId};

use crate::models::MembershipModel;

impl From<MembershipModel> for Membership {
    fn from(model: MembershipModel) -> Self {
        Membership {
            user_id: UserId::new(model.user_id),
            community_id: Snowflake::new(model.community_id),
            joined_at: model.joined_at,
        }
    }
}
