//! Error types used throughout the client

use thiserror::Error;

/// Credential shape failures detected when building the authorization header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity provider issued a credential whose `token_type` is not
    /// the literal `bearer`.
    #[error("not a bearer token (token_type: {token_type})")]
    NotBearer { token_type: String },

    /// The credential bundle carries no `id_token`.
    #[error("no id_token in credential")]
    MissingIdToken,
}

/// Main error type for smartblinds operations
#[derive(Error, Debug)]
pub enum SmartBlindsError {
    /// Credential shape invalid. Fatal to the current operation, not retried.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-2xx HTTP response from the GraphQL endpoint or the identity
    /// provider. Carries status and body for diagnostics; never retried at
    /// this layer.
    #[error("transport error (HTTP {status}): {body}")]
    Transport { status: u16, body: String },

    /// GraphQL-level `errors` array returned alongside HTTP 200.
    #[error("GraphQL errors: {0}")]
    Graphql(String),

    /// Expected JSON structure absent; indicates a protocol mismatch with
    /// upstream.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Connection-level failure before any HTTP status was produced.
    #[error("network error: {0}")]
    Network(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for smartblinds operations
pub type Result<T> = std::result::Result<T, SmartBlindsError>;
