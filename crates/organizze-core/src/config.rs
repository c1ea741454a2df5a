//! Credential handling for the Organizze API
//!
//! Credentials are resolved once at startup into an immutable value; tools
//! never read flags or the environment per call.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Environment fallback for `--organizze-username`
pub const USERNAME_ENV: &str = "ORGANIZZE_USERNAME";

/// Environment fallback for `--organizze-api-key`
pub const API_KEY_ENV: &str = "ORGANIZZE_API_KEY";

/// Username and API key pair for the Organizze API
#[derive(Clone)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: &str, api_key: &str) -> Self {
        Self {
            username: username.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Resolve credentials from CLI flags, falling back to the environment.
    ///
    /// Flags win over environment variables. A missing or empty secret is a
    /// startup-time configuration failure.
    pub fn resolve(username: Option<String>, api_key: Option<String>) -> Result<Self> {
        let username = username
            .or_else(|| std::env::var(USERNAME_ENV).ok())
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingCredential(
                "organizze-username (pass --organizze-username or set ORGANIZZE_USERNAME)",
            ))?;
        let api_key = api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingCredential(
                "organizze-api-key (pass --organizze-api-key or set ORGANIZZE_API_KEY)",
            ))?;
        Ok(Self { username, api_key })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Authorization` header value: `Basic base64(username:api_key)`
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.api_key);
        format!("Basic {}", STANDARD.encode(raw))
    }
}
