//! Business logic services
//!
//! Services orchestrate domain operations over the repositories held by the
//! `ServiceContext`.

pub mod community;
pub mod context;
pub mod error;

pub use community::CommunityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
