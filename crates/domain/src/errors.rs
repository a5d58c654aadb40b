use thiserror::Error;

/// Closed set of failure kinds a tool can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidRequest,
    RateLimited,
    ServerUnavailable,
    ApiError,
    Timeout,
    ConnectionError,
    NetworkError,
    Passthrough,
    InvalidInput,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::ServerUnavailable => "server_unavailable",
            ErrorKind::ApiError => "api_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::ConnectionError => "connection_error",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::Passthrough => "passthrough",
            ErrorKind::InvalidInput => "invalid_input",
        }
    }
}

/// Classified error produced once per failed upstream attempt, or by input
/// validation before any request is made.
///
/// The `Display` output is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited: Too many requests. Please try again in a moment.")]
    RateLimited,

    #[error("Server error: The rescue dogs API is temporarily unavailable. Please try again later.")]
    ServerUnavailable { status: u16 },

    #[error("API error ({status}): {detail}")]
    ApiError { status: u16, detail: String },

    #[error("Request timeout: The API took too long to respond. Please try again.")]
    Timeout,

    #[error("Connection error: Unable to reach the rescue dogs API. Please check your internet connection.")]
    ConnectionError,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("{0}")]
    Passthrough(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            DomainError::RateLimited => ErrorKind::RateLimited,
            DomainError::ServerUnavailable { .. } => ErrorKind::ServerUnavailable,
            DomainError::ApiError { .. } => ErrorKind::ApiError,
            DomainError::Timeout => ErrorKind::Timeout,
            DomainError::ConnectionError => ErrorKind::ConnectionError,
            DomainError::NetworkError(_) => ErrorKind::NetworkError,
            DomainError::Passthrough(_) => ErrorKind::Passthrough,
            DomainError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Retry eligibility consumed by the backend client's single retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::RateLimited
                | ErrorKind::ServerUnavailable
                | ErrorKind::Timeout
                | ErrorKind::ConnectionError
        )
    }
}

/// Low-level failure observed by a transport before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFailure {
    /// Upstream answered with a non-success status.
    Status {
        status: u16,
        detail: Option<String>,
        reason: Option<String>,
    },
    /// The request did not complete within its timeout.
    Timeout,
    /// Connection refused, host unreachable or name resolution failure.
    Connect,
    /// Any other transport-level failure.
    Transport(String),
    /// Failure outside the transport, e.g. a body that does not match its schema.
    Other(String),
}

/// Map a raw failure onto exactly one [`DomainError`]. Pure.
pub fn classify(failure: RawFailure) -> DomainError {
    match failure {
        RawFailure::Status { status, detail, reason } => match status {
            404 => DomainError::NotFound(
                detail.unwrap_or_else(|| "The requested resource was not found".to_string()),
            ),
            422 => DomainError::InvalidRequest(
                detail.unwrap_or_else(|| "Validation error".to_string()),
            ),
            429 => DomainError::RateLimited,
            s if s >= 500 => DomainError::ServerUnavailable { status: s },
            s => DomainError::ApiError {
                status: s,
                detail: detail
                    .or(reason)
                    .unwrap_or_else(|| format!("Request failed with status {s}")),
            },
        },
        RawFailure::Timeout => DomainError::Timeout,
        RawFailure::Connect => DomainError::ConnectionError,
        RawFailure::Transport(msg) => DomainError::NetworkError(msg),
        RawFailure::Other(msg) => DomainError::Passthrough(msg),
    }
}
