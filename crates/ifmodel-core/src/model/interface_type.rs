// ── Interface type taxonomy ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Mode an ethernet interface is configured in.
///
/// The variant is chosen by the tag name of the type child in the
/// configuration (`<layer3>`, `<virtual-wire>`, ...). `Pending` is the
/// placeholder an interface carries between construction and parse; a
/// completed parse never leaves it behind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InterfaceType {
    #[serde(rename = "layer3")]
    #[strum(serialize = "layer3")]
    Layer3,
    #[serde(rename = "layer2")]
    #[strum(serialize = "layer2")]
    Layer2,
    VirtualWire,
    Tap,
    Ha,
    AggregateGroup,
    LogCard,
    DecryptMirror,
    Empty,
    #[default]
    #[serde(rename = "tmp")]
    #[strum(serialize = "tmp")]
    Pending,
}

impl InterfaceType {
    /// Every type a configuration document may select, in schema order.
    pub const SUPPORTED: [Self; 9] = [
        Self::Layer3,
        Self::Layer2,
        Self::VirtualWire,
        Self::Tap,
        Self::Ha,
        Self::AggregateGroup,
        Self::LogCard,
        Self::DecryptMirror,
        Self::Empty,
    ];

    /// Map a child tag name to a supported type. The placeholder is never
    /// returned, even for a literal `<tmp>` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse::<Self>().ok().filter(|t| *t != Self::Pending)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_layer3(self) -> bool {
        matches!(self, Self::Layer3)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}
