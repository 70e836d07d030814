//! # forum-service
//!
//! Application layer containing the community use cases and their DTOs.

pub mod dto;
pub mod services;

pub use dto::{CreateCommunityRequest, HealthResponse, ReadinessResponse};
pub use services::{CommunityService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
