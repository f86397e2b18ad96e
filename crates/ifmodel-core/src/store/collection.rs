// ── Ethernet interface collection ──
//
// Ordered, name-keyed storage for the physical interfaces of one device.
// Units live inside their parent; lookups that accept a unit name go
// through the parent.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use super::InterfaceSource;
use crate::model::{EthernetInterface, InterfaceType};

/// Owning collection of physical ethernet interfaces.
///
/// Insertion order is document order. Inserting a name that is already
/// present replaces the stored interface in place (last write wins), which
/// is how duplicate `<entry>` names in a document end up resolved.
#[derive(Debug, Clone, Default)]
pub struct EthernetIfStore {
    /// Primary storage: physical interface name -> interface.
    by_name: IndexMap<String, EthernetInterface>,
}

impl EthernetIfStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a physical interface. Returns the interface that
    /// previously held the name, if any.
    pub fn insert(&mut self, iface: EthernetInterface) -> Option<EthernetInterface> {
        let replaced = self.by_name.insert(iface.name().to_owned(), iface);
        if let Some(ref old) = replaced {
            debug!(interface = old.name(), "replaced interface with a later definition");
        }
        replaced
    }

    /// Look up a physical interface by name.
    pub fn get(&self, name: &str) -> Option<&EthernetInterface> {
        self.by_name.get(name)
    }

    /// Look up a physical interface, or a unit by its full name.
    ///
    /// Unit names are matched against every parent's unit map rather than
    /// split on `.`, so units that do not follow `<parent>.<n>` are found too.
    pub fn resolve(&self, name: &str) -> Option<&EthernetInterface> {
        self.get(name).or_else(|| {
            self.by_name
                .values()
                .find_map(|parent| parent.sub_interface(name))
        })
    }

    /// The physical interface a unit belongs to. `None` for physical
    /// interfaces, or if the parent is no longer in this store.
    pub fn parent_of(&self, iface: &EthernetInterface) -> Option<&EthernetInterface> {
        iface.parent().and_then(|parent| self.get(parent.name()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EthernetInterface> {
        self.by_name.values()
    }

    /// Physical interfaces, each followed by its units.
    pub fn iter_all(&self) -> impl Iterator<Item = &EthernetInterface> {
        self.by_name
            .values()
            .flat_map(|parent| std::iter::once(parent).chain(parent.sub_interfaces().values()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Number of units across all physical interfaces.
    pub fn sub_interface_total(&self) -> usize {
        self.by_name
            .values()
            .map(EthernetInterface::sub_interface_count)
            .sum()
    }

    /// Physical interface count per type, ordered by type name.
    pub fn count_by_type(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for iface in self.by_name.values() {
            *counts.entry(iface.kind().as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Physical interfaces of one type, in document order.
    pub fn of_type(&self, kind: InterfaceType) -> impl Iterator<Item = &EthernetInterface> {
        self.by_name.values().filter(move |iface| iface.kind() == kind)
    }
}

impl InterfaceSource for EthernetIfStore {
    fn interfaces(&self) -> Box<dyn Iterator<Item = &EthernetInterface> + '_> {
        Box::new(self.by_name.values())
    }
}

impl<'a> IntoIterator for &'a EthernetIfStore {
    type Item = &'a EthernetInterface;
    type IntoIter = indexmap::map::Values<'a, String, EthernetInterface>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_name.values()
    }
}
