//! # forum-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Community, Membership};
pub use error::DomainError;
pub use traits::{CommunityRepository, RepoResult};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError, UserId};
