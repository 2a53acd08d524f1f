// ── Fetch failure type ──
//
// What a consumer sees when a repository call fails. Raw HTTP and JSON
// errors never leave this crate; the `From<modboard_api::Error>` impl
// folds them into four kinds the UI can branch on.

use std::time::Duration;

use thiserror::Error;

/// A failed read against the backend.
///
/// `Clone` and `Eq` so it can sit inside reducer state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {reason}")]
    Network { reason: String },

    #[error(
        "Request timed out after {}",
        humantime::format_duration(Duration::from_millis(*timeout_ms))
    )]
    Timeout { timeout_ms: u64 },

    #[error("Server responded with HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String },
}

/// Display label for a `FetchError` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum FetchErrorKind {
    #[strum(serialize = "network")]
    Network,
    #[strum(serialize = "timeout")]
    Timeout,
    #[strum(serialize = "server status")]
    Status,
    #[strum(serialize = "malformed payload")]
    MalformedPayload,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } => FetchErrorKind::Network,
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::Status { .. } => FetchErrorKind::Status,
            Self::MalformedPayload { .. } => FetchErrorKind::MalformedPayload,
        }
    }

    /// Whether asking again has a reasonable chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::MalformedPayload { .. } => false,
        }
    }

    /// The backend rejected the session (401) or the user's role (403).
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<modboard_api::Error> for FetchError {
    fn from(err: modboard_api::Error) -> Self {
        match err {
            modboard_api::Error::Transport(ref e) if e.is_decode() => FetchError::MalformedPayload {
                message: e.to_string(),
            },
            modboard_api::Error::Transport(e) => FetchError::Network {
                reason: e.to_string(),
            },
            modboard_api::Error::InvalidUrl(e) => FetchError::Network {
                reason: format!("invalid URL: {e}"),
            },
            modboard_api::Error::Tls(reason) => FetchError::Network { reason },
            modboard_api::Error::InvalidSession(reason) => FetchError::Network {
                reason: format!("invalid session token: {reason}"),
            },
            modboard_api::Error::Timeout { timeout_ms } => FetchError::Timeout { timeout_ms },
            modboard_api::Error::Status {
                status, message, ..
            } => FetchError::Status { status, message },
            modboard_api::Error::Deserialization { message, .. } => {
                FetchError::MalformedPayload { message }
            }
        }
    }
}
