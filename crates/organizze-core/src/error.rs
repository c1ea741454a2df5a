//! Error types for the Organizze MCP server

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Required credential absent at startup. Fatal: no tool is reachable
    /// without a complete credential pair.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// Required tool argument absent. Raised before any network call.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Malformed tool argument. Raised before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Upstream answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Transport-level failure: no response obtained.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_carries_code() {
        let err = Error::Status(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_missing_argument_display_names_argument() {
        let err = Error::MissingArgument("credit_card_id");
        assert_eq!(
            err.to_string(),
            "Missing required argument: credit_card_id"
        );
    }

    #[test]
    fn test_decode_error_wraps_serde() {
        let json_err = serde_json::from_str::<Vec<i64>>("{}").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().starts_with("Decode error: "));
    }
}
