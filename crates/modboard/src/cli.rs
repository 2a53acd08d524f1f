//! Clap derive structures for the `modboard` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// modboard -- forum administration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "modboard",
    version,
    about = "Inspect a forum's admin dashboard from the command line",
    long_about = "Reads site-wide totals and recent activity from a forum backend's\n\
        admin endpoints. Requires a session belonging to an admin user.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "MODBOARD_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Forum base URL (overrides profile)
    #[arg(long, short = 's', env = "MODBOARD_SERVER", global = true)]
    pub server: Option<String>,

    /// Session cookie value (overrides profile and keyring)
    #[arg(long, env = "MODBOARD_SESSION", global = true, hide_env_values = true)]
    pub session: Option<String>,

    /// Serve built-in sample data instead of contacting a server
    #[arg(long, global = true)]
    pub demo: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MODBOARD_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "MODBOARD_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (default: profile, then 30)
    #[arg(long, env = "MODBOARD_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show site-wide totals (users, posts, comments)
    Stats,

    /// Show the most recent users, posts, and comments
    Recent(RecentArgs),

    /// Show the user the session belongs to
    Whoami,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Recent ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RecentArgs {
    /// Only show one kind of item
    #[arg(long)]
    pub kind: Option<RecentKind>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecentKind {
    Users,
    Posts,
    Comments,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// Store a session cookie value in the system keyring
    SetSession {
        /// Profile to store it for (default: active profile)
        #[arg(long)]
        profile: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
