// ── Runtime connection configuration ──
//
// Describes how to reach a backend. Carries the session credential and
// connection tuning but never touches disk; the CLI/TUI builds one and
// hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed staging servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to a single backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Site root (e.g., `https://forum.example.com`).
    pub url: Url,
    /// Value of the `SID` session cookie. `None` browses anonymously.
    pub session: Option<SecretString>,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ServerConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(url: Url) -> Self {
        Self {
            url,
            session: None,
            tls: TlsVerification::default(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_session(mut self, session: SecretString) -> Self {
        self.session = Some(session);
        self
    }

    pub(crate) fn transport(&self) -> modboard_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => modboard_api::TlsMode::System,
            TlsVerification::CustomCa(path) => modboard_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => modboard_api::TlsMode::DangerAcceptInvalid,
        };
        modboard_api::TransportConfig {
            tls,
            timeout: self.timeout,
            session: self.session.clone(),
        }
    }
}
