//! Error types for the Glowbook client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Glowbook client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GlowbookError {
    /// Non-2xx HTTP response, carrying the parsed body for callers that
    /// want to inspect server-provided details
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: serde_json::Value,
    },

    /// Every candidate endpoint was exhausted without a usable response
    #[error("No matching endpoint found")]
    NoEndpoint { last: Option<Box<GlowbookError>> },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Domain rule violation with a human-readable message
    #[error("{0}")]
    Validation(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Response payload could not be normalized into a domain type
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Vault/storage layer error that is not plain IO
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GlowbookError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Api error from a response status and parsed body
    pub fn api(status: u16, message: impl Into<String>, body: serde_json::Value) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body,
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error maps to an HTTP 404 or a missing entity.
    ///
    /// The endpoint fallback resolver uses this to decide whether the next
    /// candidate path should be tried.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { status: 404, .. })
    }

    /// Check if this error is an HTTP 401/403 response.
    ///
    /// Session-aware callers treat these as "stored credentials are no
    /// longer valid" rather than as failures to surface.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Api { status: 401, .. } | Self::Api { status: 403, .. }
        )
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GlowbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GlowbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GlowbookError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GlowbookError>`.
pub type Result<T> = std::result::Result<T, GlowbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_matches_404_responses() {
        let err = GlowbookError::api(404, "Not Found", serde_json::Value::Null);
        assert!(err.is_not_found());

        let err = GlowbookError::api(500, "boom", serde_json::Value::Null);
        assert!(!err.is_not_found());

        let err = GlowbookError::not_found("service", "s9");
        assert!(err.is_not_found());
    }

    #[test]
    fn unauthorized_covers_both_statuses() {
        assert!(GlowbookError::api(401, "no", serde_json::Value::Null).is_unauthorized());
        assert!(GlowbookError::api(403, "no", serde_json::Value::Null).is_unauthorized());
        assert!(!GlowbookError::api(400, "no", serde_json::Value::Null).is_unauthorized());
    }

    #[test]
    fn validation_displays_bare_message() {
        let err = GlowbookError::validation("Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn no_endpoint_display_is_stable() {
        let err = GlowbookError::NoEndpoint {
            last: Some(Box::new(GlowbookError::api(
                404,
                "Not Found",
                serde_json::Value::Null,
            ))),
        };
        assert_eq!(err.to_string(), "No matching endpoint found");
    }
}
