use thiserror::Error;

/// Reasons a single repository lookup can fail.
///
/// Every variant is fatal to the lookup that produced it; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API rejected the credential (HTTP 401).
    #[error("authentication failed: check the GitHub token")]
    Authentication,

    /// The API refused the request (HTTP 403), usually because of rate limiting.
    #[error("rate limited or insufficient permission")]
    RateLimitOrPermission,

    /// Any other non-success HTTP status.
    #[error("request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    /// The response was successful but carried a GraphQL `errors` payload.
    #[error("query failed: {0}")]
    Query(String),

    /// The repository does not exist or the credential cannot see it.
    #[error("repository {owner}/{name} not found or not accessible")]
    NotFound { owner: String, name: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Authentication,
            403 => Self::RateLimitOrPermission,
            _ => Self::Transport { status, body },
        }
    }
}
