//! Community model -> entity mapper

use forum_core::entities::Community;
use forum_core::value_objects::{Snowflake, UserId};

use crate::models::CommunityModel;

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: Snowflake::new(model.id),
            name: model.name,
            creator_id: UserId::new(model.creator_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
