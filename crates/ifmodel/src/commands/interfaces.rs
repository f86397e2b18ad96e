//! Interface command handlers.

use std::path::Path;

use tabled::Tabled;

use ifmodel_core::{EthernetIfStore, EthernetInterface, InterfaceType, TracingSink};

use crate::cli::{InterfacesArgs, InterfacesCommand, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Addresses")]
    addresses: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&EthernetInterface> for InterfaceRow {
    fn from(iface: &EthernetInterface) -> Self {
        Self {
            name: if iface.is_sub_interface() {
                format!("  {}", iface.name())
            } else {
                iface.name().to_owned()
            },
            kind: iface.kind().to_string(),
            tag: iface.tag().map(|t| t.to_string()).unwrap_or_default(),
            units: if iface.is_sub_interface() {
                String::new()
            } else {
                iface.sub_interface_count().to_string()
            },
            addresses: iface.layer3_summary_or_empty(),
            description: iface.description().unwrap_or_default().to_owned(),
        }
    }
}

fn detail(iface: &EthernetInterface) -> String {
    let mut lines = vec![
        format!("Name:        {}", iface.name()),
        format!("Type:        {}", iface.kind()),
    ];
    if let Some(parent) = iface.parent() {
        lines.push(format!("Parent:      {parent}"));
        lines.push(format!(
            "Unit:        {}",
            iface.sub_interface_ordinal().unwrap_or("-")
        ));
        lines.push(format!(
            "Tag:         {}",
            iface.tag().map_or_else(|| "-".into(), |t| t.to_string())
        ));
    }
    lines.push(format!("Description: {}", iface.description().unwrap_or("-")));
    match iface.layer3_addresses() {
        Ok([]) => lines.push("Addresses:   -".into()),
        Ok(addresses) => {
            lines.push(format!("Addresses:   {}", addresses.join(", ")));
        }
        Err(_) => lines.push("Addresses:   n/a (not layer3)".into()),
    }
    if !iface.is_sub_interface() {
        let units: Vec<&str> = iface.sub_interfaces().keys().map(String::as_str).collect();
        lines.push(format!(
            "Units:       {}",
            if units.is_empty() {
                "-".into()
            } else {
                units.join(", ")
            }
        ));
    }
    lines.join("\n")
}

/// Physical interfaces, optionally narrowed to one type.
fn select(store: &EthernetIfStore, kind: Option<InterfaceType>) -> Vec<&EthernetInterface> {
    match kind {
        Some(kind) => store.of_type(kind).collect(),
        None => store.iter().collect(),
    }
}

/// Each interface followed by its units, in document order.
fn with_units<'a>(interfaces: &[&'a EthernetInterface]) -> Vec<&'a EthernetInterface> {
    interfaces
        .iter()
        .flat_map(|iface| std::iter::once(*iface).chain(iface.sub_interfaces().values()))
        .collect()
}

fn parse_type(raw: &str) -> Result<InterfaceType, CliError> {
    InterfaceType::from_tag(raw).ok_or_else(|| CliError::Validation {
        field: "type".into(),
        reason: format!(
            "unknown interface type '{raw}', expected one of {}",
            InterfaceType::SUPPORTED
                .into_iter()
                .map(InterfaceType::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: InterfacesArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        InterfacesCommand::List { file, all, r#type } => {
            let kind = r#type.as_deref().map(parse_type).transpose()?;
            let store = util::load_store(&file, settings, &mut TracingSink)?;

            let mut selected = select(&store, kind);
            // Structured formats already nest units under their parent.
            if all && matches!(settings.output, OutputFormat::Table | OutputFormat::Plain) {
                selected = with_units(&selected);
            }

            let out = output::render_list(
                settings.output,
                &selected,
                |iface| InterfaceRow::from(*iface),
                |iface| iface.name().to_owned(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        InterfacesCommand::Show { file, name } => show(&file, &name, settings),
    }
}

fn show(file: &Path, name: &str, settings: &Settings) -> Result<(), CliError> {
    let store = util::load_store(file, settings, &mut TracingSink)?;
    let iface = store
        .resolve(name)
        .ok_or_else(|| util::interface_not_found(name, file))?;

    let out = output::render_single(settings.output, iface, detail, |i| i.name().to_owned());
    output::print_output(&out, settings.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ifmodel_core::{Document, load_document};

    const DOC: &str = r#"
        <ethernet>
          <entry name="ethernet1/1">
            <layer3>
              <ip><entry name="10.0.0.1/24"/></ip>
              <units>
                <entry name="ethernet1/1.10"><tag>10</tag></entry>
              </units>
            </layer3>
            <comment>uplink</comment>
          </entry>
          <entry name="ethernet1/2"><virtual-wire/></entry>
        </ethernet>"#;

    fn store() -> EthernetIfStore {
        let doc = Document::parse(DOC).unwrap();
        load_document(&doc, "", &mut Vec::new()).unwrap()
    }

    #[test]
    fn row_for_physical_interface() {
        let store = store();
        let row = InterfaceRow::from(store.get("ethernet1/1").unwrap());
        assert_eq!(row.name, "ethernet1/1");
        assert_eq!(row.kind, "layer3");
        assert_eq!(row.units, "1");
        assert_eq!(row.addresses, "10.0.0.1/24");
        assert_eq!(row.description, "uplink");
    }

    #[test]
    fn row_for_unit_is_indented_and_tagged() {
        let store = store();
        let row = InterfaceRow::from(store.resolve("ethernet1/1.10").unwrap());
        assert_eq!(row.name, "  ethernet1/1.10");
        assert_eq!(row.tag, "10");
        assert!(row.units.is_empty());
    }

    #[test]
    fn units_follow_their_parent() {
        let store = store();
        let all = with_units(&select(&store, None));
        let names: Vec<_> = all.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["ethernet1/1", "ethernet1/1.10", "ethernet1/2"]);
    }

    #[test]
    fn type_filter_selects_matching_interfaces() {
        let store = store();
        let wires = select(&store, Some(parse_type("virtual-wire").unwrap()));
        assert_eq!(wires.len(), 1);
        assert_eq!(wires[0].name(), "ethernet1/2");
    }

    #[test]
    fn unknown_type_is_a_usage_error() {
        let err = parse_type("tmp").unwrap_err();
        assert!(err.to_string().contains("unknown interface type 'tmp'"));
    }

    #[test]
    fn detail_of_non_layer3_interface() {
        let store = store();
        let text = detail(store.get("ethernet1/2").unwrap());
        assert!(text.contains("Type:        virtual-wire"));
        assert!(text.contains("n/a (not layer3)"));
    }
}
