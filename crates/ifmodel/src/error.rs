//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use ifmodel_config::ConfigError;
use ifmodel_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const DATA: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Document ─────────────────────────────────────────────────────
    #[error("Cannot load {path}: {message}")]
    #[diagnostic(
        code(ifmodel::document),
        help("Check that the file is a well-formed XML configuration export.")
    )]
    Document { path: String, message: String },

    #[error("Interface entry is missing its '{attribute}' attribute (<{element}>)")]
    #[diagnostic(
        code(ifmodel::missing_attribute),
        help("Every ethernet entry and unit needs a name; fix the document and retry.")
    )]
    MissingAttribute { attribute: String, element: String },

    #[error("Ethernet section not found at {path}")]
    #[diagnostic(
        code(ifmodel::section_not_found),
        help(
            "Point at the right element with --section, e.g.\n\
             --section devices/entry/network/interface/ethernet\n\
             or set document.section_path in the config file."
        )
    )]
    SectionNotFound { path: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(ifmodel::not_found),
        help("Run: ifmodel {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{count} configuration warning(s) reported")]
    #[diagnostic(
        code(ifmodel::warnings),
        help("Review the duplicated entries above, or drop --strict to accept them.")
    )]
    WarningsFound { count: usize },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ifmodel::validation))]
    Validation { field: String, reason: String },

    #[error("{0}")]
    #[diagnostic(code(ifmodel::invalid_state))]
    InvalidQuery(String),

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(ifmodel::config),
        help("Inspect the file with: ifmodel config path")
    )]
    Config(#[from] ConfigError),

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(ifmodel::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Document { .. } | Self::MissingAttribute { .. } | Self::SectionNotFound { .. } => {
                exit_code::DATA
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::WarningsFound { .. } | Self::ConfigExists { .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::Config(_) => exit_code::USAGE,
            Self::InvalidQuery(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingAttribute { attribute, element } => {
                CliError::MissingAttribute { attribute, element }
            }
            CoreError::SectionNotFound { path } => CliError::SectionNotFound { path },
            CoreError::Document(e) => CliError::Document {
                path: "document".into(),
                message: e.to_string(),
            },
            CoreError::Io { path, source } => CliError::Document {
                path: path.display().to_string(),
                message: source.to_string(),
            },
            e @ (CoreError::InvalidState { .. } | CoreError::UnsupportedFormat { .. }) => {
                CliError::InvalidQuery(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_map_to_data_exit_code() {
        let err = CliError::from(CoreError::SectionNotFound {
            path: "config/devices".into(),
        });
        assert_eq!(err.exit_code(), exit_code::DATA);
    }

    #[test]
    fn accessor_errors_are_general() {
        let err = CliError::from(CoreError::UnsupportedFormat {
            name: "ethernet1/1".into(),
            expected: "<interface>.<unit>".into(),
        });
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().contains("ethernet1/1"));
    }

    #[test]
    fn strict_warnings_are_conflicts() {
        assert_eq!(
            CliError::WarningsFound { count: 2 }.exit_code(),
            exit_code::CONFLICT
        );
    }
}
