//! CLI error types with miette diagnostics.
//!
//! Maps `FetchError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

use modboard_config::ConfigError;
use modboard_core::FetchError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to server at {url}")]
    #[diagnostic(
        code(modboard::connection_failed),
        help(
            "Check that the server is running and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error(
        "Request timed out after {}",
        humantime::format_duration(Duration::from_millis(*timeout_ms))
    )]
    #[diagnostic(
        code(modboard::timeout),
        help("Increase the timeout with --timeout or check server responsiveness.")
    )]
    Timeout { timeout_ms: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Not signed in")]
    #[diagnostic(
        code(modboard::not_signed_in),
        help(
            "The server did not recognize the session for profile '{profile}'.\n\
             Store a fresh one with: modboard config set-session"
        )
    )]
    NotSignedIn { profile: String },

    #[error("No session configured for profile '{profile}'")]
    #[diagnostic(
        code(modboard::no_credentials),
        help(
            "Configure one with: modboard config init\n\
             Or set the MODBOARD_SESSION environment variable."
        )
    )]
    NoCredentials { profile: String },

    #[error("User '{username}' is not an admin")]
    #[diagnostic(
        code(modboard::forbidden),
        help("The admin dashboard is only available to admin users.")
    )]
    Forbidden { username: String },

    // ── Server ───────────────────────────────────────────────────────
    #[error("Server responded with HTTP {status}: {message}")]
    #[diagnostic(code(modboard::server_error))]
    ServerError { status: u16, message: String },

    #[error("Server sent an unexpected response: {message}")]
    #[diagnostic(
        code(modboard::malformed_response),
        help("The server may be running an incompatible version.")
    )]
    MalformedResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(modboard::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(modboard::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: modboard config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No server configured")]
    #[diagnostic(
        code(modboard::no_config),
        help(
            "Create a profile with: modboard config init\n\
             Or pass --server. Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Could not read configuration from {path}")]
    #[diagnostic(
        code(modboard::config_invalid),
        help(
            "{reason}\n\
             Fix the value above, or move the file aside and run: modboard config init"
        )
    )]
    ConfigInvalid { path: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(modboard::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(modboard::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(modboard::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Figment(err) => Self::ConfigInvalid {
                path: modboard_config::config_path().display().to_string(),
                reason: err.to_string(),
            },
            other => Self::Config(other),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotSignedIn { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Forbidden { .. } => exit_code::PERMISSION,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Translate a failed read, naming the server and profile involved.
    pub fn from_fetch(err: FetchError, url: &str, profile: &str) -> Self {
        let denied = err.is_access_denied();
        match err {
            FetchError::Network { reason } => Self::ConnectionFailed {
                url: url.into(),
                reason,
            },
            FetchError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            // 401 means the session itself is gone; 403 means it lacks the role.
            FetchError::Status { status, .. } if denied => {
                if status == 401 {
                    Self::NotSignedIn {
                        profile: profile.into(),
                    }
                } else {
                    Self::Forbidden {
                        username: "(current session)".into(),
                    }
                }
            }
            FetchError::Status { status, message } => Self::ServerError { status, message },
            FetchError::MalformedPayload { message } => Self::MalformedResponse { message },
        }
    }
}
