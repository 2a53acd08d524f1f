//! CLI configuration: thin wrapper around `modboard_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--server, --session, --insecure, --timeout).

use std::time::Duration;

use secrecy::SecretString;

use modboard_core::ServerConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use modboard_config::{Config, Profile, config_path, load_config, save_config};

/// A resolved server plus the profile name it came from.
pub struct Resolved {
    pub server: ServerConfig,
    pub profile_name: String,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ServerConfig` from the config file, profile, and CLI overrides.
///
/// Flags win over the profile. A session is mandatory here: the CLI has
/// nothing useful to show an anonymous caller.
pub fn resolve_server(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    if profile.is_none() && global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: cfg.profile_names(),
        });
    }

    // 1. Server URL (flag > env > profile)
    let url_str = global
        .server
        .as_deref()
        .or_else(|| profile.map(|p| p.server.as_str()))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CliError::NoConfig {
            path: config_path().display().to_string(),
        })?;
    let url = modboard_config::parse_server_url(url_str)?;

    // 2. Session (flag > profile chain)
    let session = match (global.session.as_deref(), profile) {
        (Some(s), _) if !s.is_empty() => SecretString::from(s.to_owned()),
        (_, Some(p)) => modboard_config::resolve_session(p, &profile_name)?,
        _ => {
            return Err(CliError::NoCredentials {
                profile: profile_name,
            });
        }
    };

    // 3. TLS verification
    let insecure =
        global.insecure || cfg.defaults.insecure || profile.and_then(|p| p.insecure).unwrap_or(false);
    let tls = modboard_config::tls_verification(
        insecure,
        profile.and_then(|p| p.ca_cert.as_deref()),
    );

    // 4. Timeout (flag > profile > defaults)
    let timeout_secs = global
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .unwrap_or(cfg.defaults.timeout);

    Ok(Resolved {
        server: ServerConfig {
            url,
            session: Some(session),
            tls,
            timeout: Duration::from_secs(timeout_secs),
        },
        profile_name,
    })
}
