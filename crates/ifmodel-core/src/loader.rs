//! Build an [`EthernetIfStore`] from a configuration document.
//!
//! Each `<entry>` under the ethernet section is parsed against the store
//! as it stands, then inserted, so a later entry with the same name is
//! reported as a duplicate and replaces the earlier one.

use std::path::Path;

use tracing::{debug, info};

use crate::diagnostics::DiagnosticSink;
use crate::document::{Document, Element};
use crate::error::{CoreError, Result};
use crate::model::EthernetInterface;
use crate::store::EthernetIfStore;

/// Where the ethernet list lives in a full device configuration export.
pub const DEFAULT_SECTION_PATH: &str = "devices/entry/network/interface/ethernet";

const SECTION_TAG: &str = "ethernet";

/// Parse every `<entry>` child of an `<ethernet>` element.
pub fn load_ethernet_section(
    section: &Element,
    sink: &mut dyn DiagnosticSink,
) -> Result<EthernetIfStore> {
    let mut store = EthernetIfStore::new();
    for node in section.elements().filter(|e| e.tag() == "entry") {
        let mut iface = EthernetInterface::placeholder();
        iface.load_from_node(node, &store, sink)?;
        store.insert(iface);
    }
    debug!(
        interfaces = store.len(),
        units = store.sub_interface_total(),
        "loaded ethernet section"
    );
    Ok(store)
}

/// Find the ethernet section of `doc`.
///
/// A document whose root already is `<ethernet>` is used as is; otherwise
/// `section_path` is followed from the root.
pub fn locate_section<'a>(doc: &'a Document, section_path: &str) -> Result<&'a Element> {
    let root = doc.root();
    if root.tag() == SECTION_TAG {
        return Ok(root);
    }
    root.find_path(section_path)
        .ok_or_else(|| CoreError::SectionNotFound {
            path: format!("{}/{}", root.tag(), section_path.trim_matches('/')),
        })
}

pub fn load_document(
    doc: &Document,
    section_path: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<EthernetIfStore> {
    let section = locate_section(doc, section_path)?;
    load_ethernet_section(section, sink)
}

/// Read, parse and load a configuration file.
pub fn load_file(
    path: &Path,
    section_path: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<EthernetIfStore> {
    let source = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = Document::parse(&source)?;
    let store = load_document(&doc, section_path, sink)?;
    info!(
        file = %path.display(),
        interfaces = store.len(),
        "loaded ethernet interfaces"
    );
    Ok(store)
}
