// ── Interface domain model ──
//
// Types parsed out of the device's interface configuration. Consumers
// (store, loader, CLI) only depend on the re-exports below.

pub mod ethernet;
pub mod interface_type;

// ── Re-exports ──────────────────────────────────────────────────────

pub use ethernet::{EthernetInterface, InterfaceRef};
pub use interface_type::InterfaceType;
