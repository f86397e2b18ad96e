//! `check` handler: load a document and report what the parser flagged.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use ifmodel_core::{EthernetIfStore, ParseWarning};

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Report ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CheckReport {
    file: String,
    interfaces: usize,
    units: usize,
    types: BTreeMap<&'static str, usize>,
    warnings: Vec<ParseWarning>,
}

impl CheckReport {
    fn new(file: String, store: &EthernetIfStore, warnings: Vec<ParseWarning>) -> Self {
        Self {
            file,
            interfaces: store.len(),
            units: store.sub_interface_total(),
            types: store.count_by_type(),
            warnings,
        }
    }

    fn summary(&self) -> String {
        let types = self
            .types
            .iter()
            .map(|(kind, count)| format!("{kind}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} interface(s), {} unit(s) [{types}]",
            self.interfaces, self.units
        )
    }
}

#[derive(Tabled)]
struct WarningRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl WarningRow {
    fn new(warning: &ParseWarning, color: bool) -> Self {
        Self {
            code: output::warn_style(warning.code(), color),
            interface: warning.interface().to_owned(),
            message: warning.to_string(),
        }
    }
}

fn render_human(report: &CheckReport, color: bool) -> String {
    let mut out = Vec::new();
    if report.warnings.is_empty() {
        out.push(output::ok_style("No warnings", color));
    } else {
        let rows: Vec<WarningRow> = report
            .warnings
            .iter()
            .map(|w| WarningRow::new(w, color))
            .collect();
        out.push(output::render_table(&rows));
    }
    out.push(report.summary());
    out.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &CheckArgs, settings: &Settings) -> Result<(), CliError> {
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let store = util::load_store(&args.file, settings, &mut warnings)?;
    let report = CheckReport::new(args.file.display().to_string(), &store, warnings);

    let color = output::should_color(settings.color);
    let out = match settings.output {
        OutputFormat::Table => render_human(&report, color),
        OutputFormat::Plain => report
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        format => output::render_single(
            format,
            &report,
            |r| render_human(r, color),
            |r| r.file.clone(),
        ),
    };
    output::print_output(&out, settings.quiet);

    let count = report.warnings.len();
    if count > 0 && (args.strict || settings.strict) {
        return Err(CliError::WarningsFound { count });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ifmodel_core::{Document, load_document};

    fn report(xml: &str) -> CheckReport {
        let doc = Document::parse(xml).unwrap();
        let mut warnings = Vec::new();
        let store = load_document(&doc, "", &mut warnings).unwrap();
        CheckReport::new("test.xml".into(), &store, warnings)
    }

    #[test]
    fn clean_document_reports_no_warnings() {
        let report = report(
            r#"<ethernet>
                 <entry name="ethernet1/1"><layer3/></entry>
                 <entry name="ethernet1/2"><tap/></entry>
               </ethernet>"#,
        );
        let text = render_human(&report, false);
        assert!(text.starts_with("No warnings"));
        assert!(text.contains("2 interface(s), 0 unit(s) [layer3: 1, tap: 1]"));
    }

    #[test]
    fn duplicates_are_tabulated() {
        let report = report(
            r#"<ethernet>
                 <entry name="ethernet1/1"><layer3><ip><entry name="10.0.0.1/24"/></ip></layer3></entry>
                 <entry name="ethernet1/1"><layer3><ip><entry name="10.0.0.2/24"/></ip></layer3></entry>
               </ethernet>"#,
        );
        assert_eq!(report.interfaces, 1);
        assert_eq!(report.warnings.len(), 1);

        let text = render_human(&report, false);
        assert!(text.contains("duplicate-interface"));
        assert!(text.contains("newIP: 10.0.0.2/24"));
    }

    #[test]
    fn report_serializes_warning_kind() {
        let report = report(
            r#"<ethernet>
                 <entry name="ethernet1/3"><layer2><units>
                   <entry name="ethernet1/3.5"><tag>five</tag></entry>
                 </units></layer2></entry>
               </ethernet>"#,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["units"], 1);
        assert_eq!(json["warnings"][0]["kind"], "invalid-tag");
        assert_eq!(json["warnings"][0]["raw"], "five");
    }
}
