mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use modboard_core::{FixtureRepository, HttpRepository};

use crate::cli::{Cli, Command};
use crate::commands::Backend;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "modboard", &mut std::io::stdout());
            Ok(())
        }

        cmd if cli.global.demo => {
            tracing::debug!(command = ?cmd, "dispatching against demo data");
            let backend = Backend::new(FixtureRepository::sample(), "demo", "demo");
            commands::dispatch(cmd, &backend, &cli.global).await
        }

        cmd => {
            let resolved = config::resolve_server(&cli.global)?;
            let url = resolved.server.url.to_string();
            let repo =
                HttpRepository::new(&resolved.server).map_err(|e| CliError::Validation {
                    field: "transport".into(),
                    reason: e.to_string(),
                })?;

            tracing::debug!(command = ?cmd, server = %url, "dispatching command");
            let backend = Backend::new(repo, url, resolved.profile_name);
            commands::dispatch(cmd, &backend, &cli.global).await
        }
    }
}
