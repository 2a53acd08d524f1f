//! Command dispatch: bridges CLI args -> core effects -> output formatting.

pub mod config_cmd;
pub mod recent;
pub mod stats;
pub mod whoami;

use modboard_core::effects;
use modboard_core::{Access, AdminRepository, CurrentUser, FetchError, Store, gate};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// A repository plus the store its effects dispatch into.
pub struct Backend<R> {
    pub repo: R,
    pub store: Store,
    /// Server URL, for error messages.
    pub url: String,
    pub profile: String,
}

impl<R: AdminRepository> Backend<R> {
    pub fn new(repo: R, url: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            repo,
            store: Store::new(),
            url: url.into(),
            profile: profile.into(),
        }
    }

    pub fn fail(&self, err: FetchError) -> CliError {
        CliError::from_fetch(err, &self.url, &self.profile)
    }

    /// Load the session and apply the admin gate.
    pub async fn require_admin(&self) -> Result<CurrentUser, CliError> {
        let user = effects::load_session(&self.repo, &self.store)
            .await
            .map_err(|e| self.fail(e))?
            .ok_or_else(|| CliError::NotSignedIn {
                profile: self.profile.clone(),
            })?;

        match gate(Some(&user)) {
            Access::Granted => Ok(user),
            Access::Forbidden => Err(CliError::Forbidden {
                username: user.username,
            }),
        }
    }
}

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch<R: AdminRepository>(
    cmd: Command,
    backend: &Backend<R>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Stats => stats::handle(backend, global).await,
        Command::Recent(args) => recent::handle(backend, &args, global).await,
        Command::Whoami => whoami::handle(backend, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
