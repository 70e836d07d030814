//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::CreateCommunityRequest;
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse};
