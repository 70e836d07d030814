//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate`; the API layer runs the
//! validation before any service is called.

use serde::Deserialize;
use validator::Validate;

/// Create community request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 3, max = 21, message = "Name must be 3-21 characters"))]
    pub name: String,
}
