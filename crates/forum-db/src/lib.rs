//! # forum-db
//!
//! Storage layer implementing the `CommunityRepository` port.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations (PostgreSQL via SQLx)
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - `PgCommunityRepository`, transactional inserts over PostgreSQL
//! - `InMemoryCommunityRepository`, a process-local store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::{create_pool, run_migrations, DatabaseConfig, PgCommunityRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::with_url("postgres://localhost/forum")).await?;
//!     run_migrations(&pool).await?;
//!     let communities = PgCommunityRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{InMemoryCommunityRepository, PgCommunityRepository};
