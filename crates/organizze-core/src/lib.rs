//! Organizze Core Library
//!
//! Shared functionality for the Organizze MCP server:
//! - Typed models for the entities the Organizze REST API returns
//! - HTTP client performing one authenticated GET per logical query
//! - Credential resolution and Basic authorization header construction
//! - Tool implementations mapping validated arguments onto client calls
//!   and shaping the empty/success/failure reply contract

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tools;

/// Test utilities including the mock Organizze API server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{Fetched, OrganizzeClient, DEFAULT_BASE_URL};
pub use config::Credentials;
pub use error::{Error, Result};
pub use tools::ToolReply;
