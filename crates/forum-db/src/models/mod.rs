//! Database models - SQLx-compatible structs for PostgreSQL tables

mod community;
mod membership;

pub use community::CommunityModel;
pub use membership::MembershipModel;
