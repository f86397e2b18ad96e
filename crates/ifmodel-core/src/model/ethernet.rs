// ── Ethernet interface model ──
//
// An `EthernetInterface` is both the parser for one `<entry>` of the
// device's ethernet list and the model that answers queries afterwards.
// Physical interfaces own their units; a unit only points back at its
// parent through a name handle resolved by the store.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface_type::InterfaceType;
use crate::diagnostics::{DiagnosticSink, ParseWarning};
use crate::document::Element;
use crate::error::{CoreError, Result};
use crate::store::InterfaceSource;

const PLACEHOLDER_NAME: &str = "tmp";

// ── InterfaceRef ────────────────────────────────────────────────────

/// Non-owning handle to a physical interface, resolved through
/// [`EthernetIfStore::parent_of`](crate::store::EthernetIfStore::parent_of).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceRef(String);

impl InterfaceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── EthernetInterface ───────────────────────────────────────────────

/// A physical ethernet interface or one of its logical units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EthernetInterface {
    name: String,

    #[serde(rename = "type")]
    kind: InterfaceType,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<InterfaceRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<u32>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    sub_interfaces: IndexMap<String, EthernetInterface>,

    #[serde(rename = "layer3_addresses", skip_serializing_if = "Vec::is_empty")]
    l3_addresses: Vec<String>,
}

impl EthernetInterface {
    /// Create an unparsed interface. Its type stays `tmp` until one of the
    /// `load_*` methods runs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InterfaceType::Pending,
            description: None,
            parent: None,
            tag: None,
            sub_interfaces: IndexMap::new(),
            l3_addresses: Vec::new(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_NAME)
    }

    /// Unit placeholder bound to `parent`, inheriting its type by value.
    fn unit_of(parent: &Self) -> Self {
        Self {
            kind: parent.kind,
            parent: Some(InterfaceRef::new(&parent.name)),
            ..Self::placeholder()
        }
    }

    // ── Parsing ─────────────────────────────────────────────────────

    /// Populate this interface from one physical `<entry>` element.
    ///
    /// `owner` is scanned for an interface with the same name before
    /// anything is assigned; a hit is reported as
    /// [`ParseWarning::DuplicateInterface`] and parsing carries on. A
    /// missing `name` attribute on the entry or any unit is fatal.
    pub fn load_from_node(
        &mut self,
        node: &Element,
        owner: &dyn InterfaceSource,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let name = node
            .attribute("name")
            .ok_or_else(|| CoreError::missing_attribute("name", node.tag()))?;

        // First match wins when the owner somehow holds several.
        let existing_addresses = owner
            .interfaces()
            .find(|iface| iface.name == name)
            .map(Self::layer3_summary_or_empty);

        self.name = name.to_owned();

        let mut type_root = None;
        for child in node.elements() {
            if let Some(kind) = InterfaceType::from_tag(child.tag()) {
                // Several type children is a schema error; the last one wins.
                self.kind = kind;
                type_root = Some(child);
            } else if child.tag() == "comment" {
                self.description = Some(child.text_content());
            }
        }

        let Some(type_root) = type_root else {
            self.kind = InterfaceType::Empty;
            debug!(interface = %self.name, "no type child, treating as empty");
            return Ok(());
        };

        if self.kind.is_layer3() {
            self.l3_addresses = collect_addresses(type_root);
        }

        if let Some(existing_addresses) = existing_addresses {
            sink.report(ParseWarning::DuplicateInterface {
                name: self.name.clone(),
                new_addresses: self.layer3_summary_or_empty(),
                existing_addresses,
            });
        }

        if let Some(units) = type_root.first_element("units") {
            for unit_node in units.elements() {
                let mut unit = Self::unit_of(self);
                unit.load_sub_from_node(unit_node, sink)?;

                if let Some(existing) = self.sub_interfaces.get(&unit.name) {
                    sink.report(ParseWarning::DuplicateSubInterface {
                        parent: self.name.clone(),
                        name: unit.name.clone(),
                        new_addresses: unit.layer3_summary_or_empty(),
                        existing_addresses: existing.layer3_summary_or_empty(),
                    });
                }
                // Last write wins; the entry keeps its first position.
                self.sub_interfaces.insert(unit.name.clone(), unit);
            }
        }

        debug!(
            interface = %self.name,
            kind = %self.kind,
            addresses = self.l3_addresses.len(),
            units = self.sub_interfaces.len(),
            "parsed ethernet interface"
        );
        Ok(())
    }

    /// Populate a unit created by [`unit_of`](Self::unit_of) from one
    /// `<units>` child.
    ///
    /// The inherited type decides whether an `ip` list is read. Units never
    /// have units of their own.
    fn load_sub_from_node(
        &mut self,
        node: &Element,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let name = node
            .attribute("name")
            .ok_or_else(|| CoreError::missing_attribute("name", node.tag()))?;
        self.name = name.to_owned();

        for child in node.elements() {
            match child.tag() {
                "comment" => self.description = Some(child.text_content()),
                "tag" => {
                    let raw = child.text_content();
                    self.tag = if let Ok(tag) = raw.trim().parse::<u32>() {
                        Some(tag)
                    } else {
                        sink.report(ParseWarning::InvalidTag {
                            interface: self.name.clone(),
                            raw,
                        });
                        None
                    };
                }
                _ => {}
            }
        }

        if self.kind.is_layer3() {
            self.l3_addresses = collect_addresses(node);
        }
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured type.
    pub fn kind(&self) -> InterfaceType {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_sub_interface(&self) -> bool {
        self.parent.is_some()
    }

    /// Handle to the owning physical interface (units only).
    pub fn parent(&self) -> Option<&InterfaceRef> {
        self.parent.as_ref()
    }

    pub fn tag(&self) -> Option<u32> {
        self.tag
    }

    /// Always true: this family of interfaces is ethernet.
    #[allow(clippy::unused_self)]
    pub fn is_ethernet_kind(&self) -> bool {
        true
    }

    /// Unit number of a sub-interface, i.e. `"10"` for `ethernet1/1.10`.
    pub fn sub_interface_ordinal(&self) -> Result<&str> {
        if !self.is_sub_interface() {
            return Err(CoreError::invalid_state(
                "sub_interface_ordinal",
                &self.name,
                "only sub-interfaces have a unit number",
            ));
        }

        let mut parts = self.name.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(unit), None) => Ok(unit),
            _ => Err(CoreError::UnsupportedFormat {
                name: self.name.clone(),
                expected: "<interface>.<unit>".into(),
            }),
        }
    }

    /// Layer-3 addresses in document order. Fails unless the type is
    /// `layer3`; a layer3 interface without an `ip` list yields an empty
    /// slice.
    pub fn layer3_addresses(&self) -> Result<&[String]> {
        if !self.kind.is_layer3() {
            return Err(CoreError::invalid_state(
                "layer3_addresses",
                &self.name,
                &format!("interface type is {}, not layer3", self.kind),
            ));
        }
        Ok(&self.l3_addresses)
    }

    /// Addresses joined with `", "`. No addresses renders as `""`.
    pub fn layer3_addresses_summary(&self) -> Result<String> {
        Ok(self.layer3_addresses()?.join(", "))
    }

    /// Like [`layer3_addresses_summary`](Self::layer3_addresses_summary),
    /// but `""` for non-layer3 interfaces instead of an error.
    pub fn layer3_summary_or_empty(&self) -> String {
        self.layer3_addresses_summary().unwrap_or_default()
    }

    pub fn sub_interface_count(&self) -> usize {
        self.sub_interfaces.len()
    }

    /// Units keyed by name, in document order.
    pub fn sub_interfaces(&self) -> &IndexMap<String, EthernetInterface> {
        &self.sub_interfaces
    }

    pub fn sub_interface(&self, name: &str) -> Option<&EthernetInterface> {
        self.sub_interfaces.get(name)
    }
}

impl Default for EthernetInterface {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// `name` attributes of the element children of the first `<ip>` under
/// `root`. Children without a name are skipped.
fn collect_addresses(root: &Element) -> Vec<String> {
    root.first_element("ip")
        .map(|ip| {
            ip.elements()
                .filter_map(|entry| entry.attribute("name"))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
