use reqwest::StatusCode;
use rescuedogs_mcp_domain::RawFailure;
use serde_json::Value;

/// Map a reqwest transport error. Timeouts are checked first because a
/// connect timeout reports both flags.
pub fn from_transport(error: &reqwest::Error) -> RawFailure {
    if error.is_timeout() {
        RawFailure::Timeout
    } else if error.is_connect() {
        RawFailure::Connect
    } else if error.is_decode() {
        RawFailure::Other(error.to_string())
    } else {
        RawFailure::Transport(error.to_string())
    }
}

/// Build the failure for a non-success HTTP response.
pub fn from_status(status: StatusCode, body: &[u8]) -> RawFailure {
    RawFailure::Status {
        status: status.as_u16(),
        detail: extract_detail(body),
        reason: status.canonical_reason().map(str::to_string),
    }
}

/// `detail` field of a JSON error body. Strings are used verbatim, anything
/// else is re-serialized as compact JSON.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
