//! Shared helpers for command handlers.

use std::path::Path;

use ifmodel_core::{CoreError, DiagnosticSink, EthernetIfStore};

use crate::config::Settings;
use crate::error::CliError;

/// Load the ethernet section of `file`, reporting parse errors against
/// the file rather than the in-memory document.
pub fn load_store(
    file: &Path,
    settings: &Settings,
    sink: &mut dyn DiagnosticSink,
) -> Result<EthernetIfStore, CliError> {
    ifmodel_core::load_file(file, &settings.section_path, sink).map_err(|err| match err {
        CoreError::Document(e) => CliError::Document {
            path: file.display().to_string(),
            message: e.to_string(),
        },
        other => other.into(),
    })
}

/// Not-found error pointing the user at the listing command for `file`.
pub fn interface_not_found(name: &str, file: &Path) -> CliError {
    CliError::NotFound {
        resource_type: "interface".into(),
        identifier: name.into(),
        list_command: format!("interfaces list {}", file.display()),
    }
}
