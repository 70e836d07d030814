//! Community handlers

use axum::extract::State;
use forum_service::{CommunityService, CreateCommunityRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Client-facing message for unexpected creation failures
const CREATE_FAILED: &str = "Could not create Subreddit";

/// Create a new community and subscribe its creator
///
/// POST /api/subreddit
///
/// Responds with the created community's name as plain text. A body that
/// is not JSON at all is reported like any other unexpected failure.
pub async fn create_community(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<ValidatedJson<CreateCommunityRequest>, ApiError>,
) -> ApiResult<String> {
    let ValidatedJson(request) = body.map_err(|e| e.with_context(CREATE_FAILED))?;
    let service = CommunityService::new(state.services());
    let community = service
        .create_community(auth.user_id, request)
        .await
        .map_err(|e| ApiError::from_service(e, CREATE_FAILED))?;

    Ok(community.name)
}
