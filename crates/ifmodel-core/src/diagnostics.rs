// ── Parse diagnostics ──
//
// Non-fatal anomalies found while loading a document. The parser hands
// them to a caller-supplied sink and keeps going; fatal problems are
// `CoreError`s instead.

use std::fmt;

use serde::Serialize;

/// A configuration anomaly that does not stop the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParseWarning {
    /// A physical interface name already present in the store.
    DuplicateInterface {
        name: String,
        new_addresses: String,
        existing_addresses: String,
    },

    /// A unit name repeated under one physical interface.
    DuplicateSubInterface {
        parent: String,
        name: String,
        new_addresses: String,
        existing_addresses: String,
    },

    /// A unit `<tag>` whose text is not an unsigned integer.
    InvalidTag { interface: String, raw: String },
}

impl ParseWarning {
    /// Name of the interface the warning is about.
    pub fn interface(&self) -> &str {
        match self {
            Self::DuplicateInterface { name, .. } | Self::DuplicateSubInterface { name, .. } => {
                name
            }
            Self::InvalidTag { interface, .. } => interface,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateInterface { .. } => "duplicate-interface",
            Self::DuplicateSubInterface { .. } => "duplicate-subinterface",
            Self::InvalidTag { .. } => "invalid-tag",
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateInterface {
                name,
                new_addresses,
                existing_addresses,
            } => write!(
                f,
                "duplicated interface named '{name}' detected \
                 (newIP: {new_addresses}) (existingIP: {existing_addresses}), \
                 you should review your XML config file"
            ),
            Self::DuplicateSubInterface {
                parent,
                name,
                new_addresses,
                existing_addresses,
            } => write!(
                f,
                "duplicated subinterface named '{name}' under '{parent}' detected \
                 (newIP: {new_addresses}) (existingIP: {existing_addresses}), \
                 you should review your XML config file"
            ),
            Self::InvalidTag { interface, raw } => {
                write!(f, "subinterface '{interface}' has a non-numeric tag '{raw}'")
            }
        }
    }
}

// ── Sinks ───────────────────────────────────────────────────────────

/// Receives warnings as the parser finds them.
pub trait DiagnosticSink {
    fn report(&mut self, warning: ParseWarning);
}

/// Collects warnings for later inspection.
impl DiagnosticSink for Vec<ParseWarning> {
    fn report(&mut self, warning: ParseWarning) {
        self.push(warning);
    }
}

/// Logs every warning through `tracing` and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, warning: ParseWarning) {
        tracing::warn!(
            code = warning.code(),
            interface = warning.interface(),
            "{warning}"
        );
    }
}
