// ── Interface store ──
//
// Owning storage for parsed interfaces, and the read-only view of it the
// parser uses for duplicate-name detection.

mod collection;

pub use collection::EthernetIfStore;

use crate::model::EthernetInterface;

/// Read access to the interfaces already registered with an owner.
///
/// The parser only enumerates; it never inserts. Callers insert each
/// parsed interface before parsing the next one so later entries see it.
pub trait InterfaceSource {
    fn interfaces(&self) -> Box<dyn Iterator<Item = &EthernetInterface> + '_>;
}

/// An owner with nothing registered, for parsing a node in isolation.
impl InterfaceSource for () {
    fn interfaces(&self) -> Box<dyn Iterator<Item = &EthernetInterface> + '_> {
        Box::new(std::iter::empty())
    }
}
