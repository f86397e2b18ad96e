// ── Core error types ──
//
// Fatal conditions raised while loading a configuration document, plus
// the caller errors raised by interface accessors. Duplicate names are
// NOT errors here -- they travel through `DiagnosticSink` as warnings.

use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Parse errors (fatal, abort the whole load) ───────────────────
    #[error("Required attribute '{attribute}' not found on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    #[error("Configuration section not found: {path}")]
    SectionNotFound { path: String },

    #[error("Malformed configuration document: {0}")]
    Document(#[from] DocumentError),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Accessor errors (caller misuse) ──────────────────────────────
    #[error("{operation} is not valid on interface '{interface}': {reason}")]
    InvalidState {
        operation: String,
        interface: String,
        reason: String,
    },

    #[error("Unsupported interface name '{name}' (expected {expected})")]
    UnsupportedFormat { name: String, expected: String },
}

impl CoreError {
    pub(crate) fn missing_attribute(attribute: &str, element: &str) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
            element: element.into(),
        }
    }

    pub(crate) fn invalid_state(operation: &str, interface: &str, reason: &str) -> Self {
        Self::InvalidState {
            operation: operation.into(),
            interface: interface.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from loading a document (as opposed to
    /// querying an already-loaded model).
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. }
                | Self::SectionNotFound { .. }
                | Self::Document(_)
                | Self::Io { .. }
        )
    }
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
