//! Ethernet interface model for device configuration documents.
//!
//! Reads the ethernet section of a firewall configuration export into an
//! in-memory hierarchy of physical interfaces and their logical units:
//!
//! - **[`Document`]** — Owned XML tree built with `quick-xml`, with the
//!   small lookup surface the parser needs (attribute, first child by tag,
//!   element iteration, text content).
//!
//! - **[`EthernetInterface`]** — Parser and model in one. Its type child
//!   ([`InterfaceType`]) decides which fields are read; units under
//!   `<units>` become owned sub-interfaces that point back at their parent
//!   through an [`InterfaceRef`].
//!
//! - **[`EthernetIfStore`]** — Ordered, name-keyed owner of the physical
//!   interfaces. The parser reads it (via [`InterfaceSource`]) to spot
//!   duplicate names.
//!
//! - **Diagnostics** — Duplicate names and malformed tags are
//!   [`ParseWarning`]s delivered to a [`DiagnosticSink`]; only a missing
//!   `name` or an unreadable document stops a load ([`CoreError`]).
//!
//! - **[`loader`]** — Locates the ethernet section and fills a store.

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use diagnostics::{DiagnosticSink, ParseWarning, TracingSink};
pub use document::{Document, DocumentError, Element, Node, NodeKind};
pub use error::CoreError;
pub use loader::{DEFAULT_SECTION_PATH, load_document, load_ethernet_section, load_file};
pub use model::{EthernetInterface, InterfaceRef, InterfaceType};
pub use store::{EthernetIfStore, InterfaceSource};
