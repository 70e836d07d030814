//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create community request
#[derive(Debug, Serialize)]
pub struct CreateCommunityRequest {
    pub name: String,
}

impl CreateCommunityRequest {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// A valid name that no other test in this process uses
    ///
    /// Includes the process id so reruns against a shared database do not
    /// collide with earlier rows.
    pub fn unique() -> Self {
        Self {
            name: format!("t{}x{}", std::process::id(), unique_suffix()),
        }
    }
}

/// Unique user id for a test session
pub fn unique_user() -> String {
    format!("user-{}-{}", std::process::id(), unique_suffix())
}
