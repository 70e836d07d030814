//! HTTP request handlers

pub mod communities;
pub mod health;
