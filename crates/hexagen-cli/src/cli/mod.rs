//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexagen",
    bin_name = "hexagen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2b21} Hexagonal .NET solution generator",
    long_about = "Hexagen creates a layered .NET solution (Domain, Helpers, Dapper, \
                  ExternalServices, Application, IoC, WebAPI, Tests), wires the \
                  project references and packages, and writes starter sources.",
    after_help = "EXAMPLES:\n\
        \x20 hexagen new --name Acme --directory ./src\n\
        \x20 hexagen new -n Acme -d ./src --framework net8.0 --dry-run\n\
        \x20 hexagen layers --format json\n\
        \x20 hexagen completions bash > /usr/share/bash-completion/completions/hexagen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new solution.
    #[command(
        visible_alias = "n",
        about = "Generate a new solution",
        after_help = "EXAMPLES:\n\
            \x20 hexagen new --name Acme --directory ./src\n\
            \x20 hexagen new -n Acme -d ./src -f net6.0 --yes\n\
            \x20 hexagen new -n Acme -d ./src --dry-run"
    )]
    New(NewArgs),

    /// Print the layer topology.
    #[command(
        visible_alias = "ls",
        about = "Show layers, references and packages",
        after_help = "EXAMPLES:\n\
            \x20 hexagen layers\n\
            \x20 hexagen layers --format json"
    )]
    Layers(LayersArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hexagen completions bash > ~/.local/share/bash-completion/completions/hexagen\n\
            \x20 hexagen completions zsh  > ~/.zfunc/_hexagen\n\
            \x20 hexagen completions fish > ~/.config/fish/completions/hexagen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the hexagen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 hexagen config get defaults.framework\n\
            \x20 hexagen config list\n\
            \x20 hexagen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `hexagen new`.
///
/// `--name` and `--directory` are optional here so that a missing value is
/// reported by the command itself, before anything is touched.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Solution name, e.g. `Acme` or `Acme.Billing`.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Solution name"
    )]
    pub name: Option<String>,

    /// Directory the solution folder is created in.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Working directory for the solution"
    )]
    pub directory: Option<String>,

    /// Target framework moniker passed to every project.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "TFM",
        help = "Target framework (default: netcoreapp3.1 or the configured value)"
    )]
    pub framework: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview the toolchain commands and files without touching disk.
    #[arg(
        long = "dry-run",
        help = "Show what would be generated without generating"
    )]
    pub dry_run: bool,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `hexagen layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LayersFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayersFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hexagen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `hexagen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.program`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
