//! Clap derive structures for the `ifmodel` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ifmodel -- inspect ethernet interfaces in firewall configuration exports
#[derive(Debug, Parser)]
#[command(
    name = "ifmodel",
    version,
    about = "Inspect ethernet interface configuration in firewall configuration exports",
    long_about = "Reads the ethernet section of an XML configuration export and shows\n\
        physical interfaces, their logical units, types and layer-3 addresses.\n\n\
        Duplicate interface names are reported as warnings; the later\n\
        definition is the one kept.",
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
    /// Config file to use instead of the platform default
    #[arg(long, env = "IFMODEL_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Element path from the document root to the ethernet section
    #[arg(long, env = "IFMODEL_SECTION", global = true, value_name = "PATH")]
    pub section: Option<String>,

    /// Output format (defaults to the configured one)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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
    /// List and inspect ethernet interfaces
    #[command(alias = "if", alias = "i")]
    Interfaces(InterfacesArgs),

    /// Load a document and report configuration anomalies
    Check(CheckArgs),

    /// Show configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Interfaces ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InterfacesArgs {
    #[command(subcommand)]
    pub command: InterfacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InterfacesCommand {
    /// List physical interfaces
    #[command(alias = "ls")]
    List {
        /// Configuration document (XML)
        file: PathBuf,

        /// Also list sub-interfaces, each after its parent (table/plain)
        #[arg(long, short = 'a')]
        all: bool,

        /// Only interfaces of this type (e.g. layer3, virtual-wire)
        #[arg(long, short = 't', value_name = "TYPE")]
        r#type: Option<String>,
    },

    /// Show one interface or sub-interface
    Show {
        /// Configuration document (XML)
        file: PathBuf,

        /// Interface name, e.g. ethernet1/1 or ethernet1/1.10
        name: String,
    },
}

// ── Check ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Configuration document (XML)
    pub file: PathBuf,

    /// Exit non-zero when any warning is reported
    #[arg(long)]
    pub strict: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
