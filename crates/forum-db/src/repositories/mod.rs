//! Repository implementations
//!
//! Implementations of the `CommunityRepository` port defined in forum-core.

mod community;
mod error;
mod memory;

pub use community::PgCommunityRepository;
pub use memory::InMemoryCommunityRepository;
