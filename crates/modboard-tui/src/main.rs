//! `modboard-tui`: terminal admin dashboard for a forum backend.
//!
//! Built on [ratatui](https://ratatui.rs). The admin shell is gated on the
//! signed-in user: admins get the sidebar and the dashboard, everyone else
//! sees a Forbidden page. A background data bridge owns the repository and
//! feeds store snapshots into the UI loop.
//!
//! Logs go to a file (default `/tmp/modboard-tui.log`) so they never
//! corrupt the terminal.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use modboard_config::ConfigError;
use modboard_core::{AdminRepository, FixtureRepository, HttpRepository, ServerConfig, Store};

use crate::app::App;
use crate::data_bridge::run_data_bridge;

/// Terminal admin dashboard for forum moderators.
#[derive(Parser, Debug)]
#[command(name = "modboard-tui", version, about)]
struct Cli {
    /// Forum server URL (e.g., https://forum.example.com)
    #[arg(short = 'u', long, env = "MODBOARD_URL")]
    url: Option<String>,

    /// Session cookie value (the `SID` cookie)
    #[arg(long, env = "MODBOARD_SESSION", hide_env_values = true)]
    session: Option<String>,

    /// Config profile to read server and session from
    #[arg(short = 'p', long, env = "MODBOARD_PROFILE")]
    profile: Option<String>,

    /// Use built-in sample data instead of a server
    #[arg(long)]
    demo: bool,

    /// Sign the demo user in without admin rights
    #[arg(long, requires = "demo")]
    non_admin: bool,

    /// Initial route
    #[arg(long, default_value = "/admin")]
    path: String,

    /// Log file path
    #[arg(long, default_value = "/tmp/modboard-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Demo reads are slowed down so the loading state is visible.
const DEMO_LATENCY: Duration = Duration::from_millis(600);

/// File-only tracing. The returned guard must outlive the app so buffered
/// lines are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("modboard_tui={level},modboard_core={level},modboard_api={level}"))
    });

    let dir = cli.log_file.parent().unwrap_or(Path::new("/tmp"));
    let file = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("modboard-tui.log"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Server settings from flags and the config file. Flags win; without a
/// URL flag the profile must supply one. A missing session is not an
/// error: the shell simply shows the Forbidden page.
fn resolve_server(cli: &Cli) -> Result<ServerConfig> {
    let cfg = modboard_config::load_config().wrap_err_with(|| {
        format!(
            "could not read configuration from {}",
            modboard_config::config_path().display()
        )
    })?;
    let profile_name = cli
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    let profile = cfg.profiles.get(&profile_name);

    let mut server = match (&cli.url, profile) {
        (Some(raw), profile) => {
            let url = modboard_config::parse_server_url(raw)?;
            let mut server = ServerConfig::new(url);
            if let Some(profile) = profile {
                match modboard_config::resolve_session(profile, &profile_name) {
                    Ok(session) => server = server.with_session(session),
                    Err(ConfigError::NoCredentials { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }
            server
        }
        (None, Some(profile)) => modboard_config::profile_to_server_config(profile, &profile_name)
            .wrap_err_with(|| format!("profile '{profile_name}' is not usable"))?,
        (None, None) => {
            return Err(eyre!(
                "no server configured: pass --url, run `modboard config init`, or try --demo"
            ));
        }
    };

    if let Some(session) = &cli.session {
        server = server.with_session(SecretString::from(session.clone()));
    }
    Ok(server)
}

/// `host[:port]` for the status bar.
fn server_label(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_owned(),
        (None, _) => url.as_str().to_owned(),
    }
}

async fn launch<R>(repo: R, label: String, path: String) -> Result<()>
where
    R: AdminRepository + 'static,
{
    let store = Arc::new(Store::new());
    let cancel = CancellationToken::new();
    let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

    let mut app = App::new(label, path, fetch_tx);
    let bridge = tokio::spawn(run_data_bridge(
        Arc::new(repo),
        store,
        app.action_sender(),
        fetch_rx,
        cancel.clone(),
    ));

    let result = app.run(&cancel).await;
    cancel.cancel();
    let _ = bridge.await;
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    if cli.demo {
        info!(non_admin = cli.non_admin, "starting modboard-tui with demo data");
        let mut repo = FixtureRepository::sample().with_latency(DEMO_LATENCY);
        if cli.non_admin {
            repo = repo.non_admin();
        }
        return launch(repo, "demo".into(), cli.path.clone()).await;
    }

    let server = resolve_server(&cli)?;
    let label = server_label(&server.url);
    info!(server = %server.url, session = server.session.is_some(), "starting modboard-tui");

    let repo = HttpRepository::new(&server).wrap_err("could not build the HTTP client")?;
    launch(repo, label, cli.path.clone()).await
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn non_admin_requires_demo() {
        assert!(Cli::try_parse_from(["modboard-tui", "--non-admin"]).is_err());
        let cli = Cli::try_parse_from(["modboard-tui", "--demo", "--non-admin"]).expect("parse");
        assert!(cli.non_admin);
        assert_eq!(cli.path, "/admin");
    }

    #[test]
    fn label_is_host_and_port() {
        let url = Url::parse("https://forum.example.com/").expect("url");
        assert_eq!(server_label(&url), "forum.example.com");
        let url = Url::parse("http://127.0.0.1:4567").expect("url");
        assert_eq!(server_label(&url), "127.0.0.1:4567");
    }
}
