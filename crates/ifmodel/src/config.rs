//! CLI configuration — thin wrapper around `ifmodel_config` shared types.
//!
//! Resolves the effective settings for one invocation: CLI flags take
//! priority over the config file, which takes priority over defaults.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use ifmodel_config::{Config, load_config, load_config_from, save_config, save_config_to};

/// Effective settings after merging flags over the loaded config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub section_path: String,
    pub strict: bool,
    pub quiet: bool,
}

/// Config file in effect: `--config` flag, else the platform default.
pub fn active_config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(ifmodel_config::config_path)
}

/// Load the config file in effect (a missing file yields defaults).
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let cfg = match global.config {
        Some(ref path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(cfg)
}

/// Write `cfg` to the config file in effect.
pub fn save(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    match global.config {
        Some(ref path) => save_config_to(cfg, path)?,
        None => save_config(cfg)?,
    }
    Ok(())
}

/// Translate the loaded `Config` + global flags into `Settings`.
pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Settings, CliError> {
    let output = match global.output {
        Some(format) => format,
        None => parse_value::<OutputFormat>("defaults.output", &cfg.defaults.output)?,
    };
    let color = match global.color {
        Some(mode) => mode,
        None => parse_value::<ColorMode>("defaults.color", &cfg.defaults.color)?,
    };
    let section_path = global
        .section
        .clone()
        .unwrap_or_else(|| cfg.document.section_path.clone());

    Ok(Settings {
        output,
        color,
        section_path,
        strict: cfg.document.strict,
        quiet: global.quiet,
    })
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
