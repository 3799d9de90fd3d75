//! Error types for Covalent API operations.
//!
//! This module defines the [`CovalentError`] enum which encompasses all
//! failure modes of the client: local validation failures that are detected
//! before any network request is attempted, and transport failures that are
//! propagated unmodified from the HTTP layer.

use thiserror::Error;

/// Errors that can occur while building or executing a Covalent API request.
///
/// # Error Categories
///
/// - **Validation errors** (detected locally, before any network call):
///   [`MissingCredential`](CovalentError::MissingCredential),
///   [`MissingParameter`](CovalentError::MissingParameter),
///   [`InvalidParameter`](CovalentError::InvalidParameter)
/// - **Transport errors** (propagated from the HTTP layer):
///   [`RequestFailed`](CovalentError::RequestFailed),
///   [`ServerError`](CovalentError::ServerError)
/// - **URL construction**: [`UrlError`](CovalentError::UrlError)
///
/// Validation errors are terminal for the call: nothing is retried and no
/// partial request is returned. Semantically invalid but syntactically valid
/// values (an unsupported chain id, a malformed address) are deliberately not
/// checked locally and surface as [`ServerError`](CovalentError::ServerError)
/// once the remote service rejects them.
#[derive(Debug, Error)]
pub enum CovalentError {
    /// No API key was supplied, neither as an explicit argument nor through
    /// configuration. Raised before any URL is assembled.
    #[error(
        "No API key provided: pass `api_key` explicitly or set the COVALENT_API_KEY environment variable"
    )]
    MissingCredential,

    /// A parameter the endpoint requires was absent or blank.
    #[error("Missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// A value for an enumerated parameter was not a member of its closed set.
    ///
    /// The message names the offending field, the rejected value and the
    /// accepted set so callers can correct the input without consulting the
    /// remote API documentation.
    #[error("Invalid value `{value}` for `{field}`: accepted values are {accepted}")]
    InvalidParameter {
        /// The parameter that failed validation.
        field: &'static str,
        /// The rejected input value.
        value: String,
        /// Human-readable description of the accepted set.
        accepted: &'static str,
    },

    /// The HTTP request failed due to a network or connection error.
    ///
    /// Typically connection refused, a timeout, DNS resolution failure or a
    /// TLS handshake error.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The remote service returned a non-success HTTP status code.
    ///
    /// Contains both the status and the response body; the body usually
    /// carries the service's own error description (invalid chain id,
    /// malformed address, exceeded quota).
    #[error("Server error {status}: {body}")]
    ServerError {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// The assembled request URL did not parse as a well-formed URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}
