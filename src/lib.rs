// ABOUTME: Library root for docker-check-tags - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod check;
pub mod commands;
pub mod compose;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod registry;
pub mod types;
pub mod version;
