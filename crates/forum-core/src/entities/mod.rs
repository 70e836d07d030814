//! Domain entities - core business objects

mod community;
mod membership;

pub use community::Community;
pub use membership::Membership;
