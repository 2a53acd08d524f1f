//! Config subcommand handlers.

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

const MASK: &str = "****";

/// A copy of the config with plaintext sessions masked.
fn redacted(cfg: &Config) -> Config {
    let mut out = cfg.clone();
    for profile in out.profiles.values_mut() {
        if profile.session.is_some() {
            profile.session = Some(MASK.into());
        }
    }
    out
}

/// Format config for display. Expects an already-redacted config.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = write!(out, "timeout = {}", cfg.defaults.timeout);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out, "\n");
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = write!(out, "server = \"{}\"", p.server);
        if let Some(ref session) = p.session {
            let _ = write!(out, "\nsession = \"{session}\"");
        }
        if let Some(ref env) = p.session_env {
            let _ = write!(out, "\nsession_env = \"{env}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = write!(out, "\nca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = write!(out, "\ninsecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = write!(out, "\ntimeout = {timeout}");
        }
    }

    out
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn keyring_err(action: &str, e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to {action}: {e}"),
    }
}

/// Store a session value in the system keyring under `profile_name`.
fn store_in_keyring(profile_name: &str, session: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new(
        modboard_config::KEYRING_SERVICE,
        &modboard_config::keyring_key(profile_name),
    )
    .map_err(|e| keyring_err("access keyring", e))?;
    entry
        .set_password(session)
        .map_err(|e| keyring_err("store session in keyring", e))
}

fn prompt_session() -> Result<String, CliError> {
    let session = rpassword::prompt_password("Session cookie (SID): ").map_err(prompt_err)?;
    if session.is_empty() {
        return Err(CliError::Validation {
            field: "session".into(),
            reason: "session cannot be empty".into(),
        });
    }
    Ok(session)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(),

        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config()?);
            let out = output::render_single(&global.output, &cfg, format_config, |c| {
                c.profile_names()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: modboard config init");
            } else {
                let lines: Vec<String> = cfg
                    .profiles
                    .keys()
                    .map(|name| {
                        let marker = if name == default { " *" } else { "" };
                        format!("{name}{marker}")
                    })
                    .collect();
                output::print_output(&lines.join("\n"), global.quiet);
            }
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: cfg.profile_names(),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        ConfigCommand::SetSession { profile } => {
            let cfg = config::load_config()?;
            let profile_name =
                profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));
            if !cfg.profiles.contains_key(&profile_name) {
                return Err(CliError::ProfileNotFound {
                    available: cfg.profile_names(),
                    name: profile_name,
                });
            }
            let session = prompt_session()?;
            store_in_keyring(&profile_name, &session)?;
            eprintln!("✓ Session stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}

/// Interactive wizard: profile name, server URL, session, storage choice.
fn init() -> Result<(), CliError> {
    let config_path = config::config_path();
    let mut cfg = config::load_config()?;
    eprintln!("modboard configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(prompt_err)?;

    let server: String = Input::new()
        .with_prompt("Forum URL")
        .default("http://localhost:8080".into())
        .interact_text()
        .map_err(prompt_err)?;
    modboard_config::parse_server_url(&server)?;

    eprintln!("\n   Copy the SID cookie from a browser signed in as an admin.");
    let session = prompt_session()?;

    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt("Where to store the session?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let plaintext = if selection == 0 {
        store_in_keyring(&profile_name, &session)?;
        eprintln!("   ✓ Session stored in system keyring");
        None
    } else {
        Some(session)
    };

    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            session: plaintext,
            ..Profile::new(server)
        },
    );
    cfg.default_profile = Some(profile_name.clone());
    config::save_config(&cfg)?;

    eprintln!("\n✓ Configuration written to {}", config_path.display());
    eprintln!("  Active profile: {profile_name}");
    eprintln!("\n  Test it: modboard whoami");
    Ok(())
}
