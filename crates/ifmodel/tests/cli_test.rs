//! Integration tests for the `ifmodel` CLI binary.
//!
//! Each test writes its own configuration export into a temp directory and
//! runs the binary against it with the user's config and environment
//! isolated.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

const RUNNING_CONFIG: &str = r#"<?xml version="1.0"?>
<config version="10.1.0">
  <devices>
    <entry name="localhost.localdomain">
      <network>
        <interface>
          <ethernet>
            <entry name="ethernet1/1">
              <layer3>
                <ip>
                  <entry name="203.0.113.2/30"/>
                  <entry name="198.51.100.1/24"/>
                </ip>
              </layer3>
              <comment>uplink</comment>
            </entry>
            <entry name="ethernet1/2">
              <layer3>
                <units>
                  <entry name="ethernet1/2.10">
                    <ip><entry name="10.10.0.1/24"/></ip>
                    <tag>10</tag>
                  </entry>
                </units>
              </layer3>
            </entry>
            <entry name="ethernet1/3">
              <virtual-wire/>
            </entry>
          </ethernet>
        </interface>
      </network>
    </entry>
  </devices>
</config>
"#;

const DUPLICATED: &str = r#"<ethernet>
  <entry name="ethernet1/4"><layer3><ip><entry name="10.1.1.1/24"/></ip></layer3></entry>
  <entry name="ethernet1/4"><layer3><ip><entry name="10.2.2.2/24"/></ip></layer3></entry>
</ethernet>
"#;

/// Build a [`Command`] for the `ifmodel` binary with env isolation.
///
/// Clears all `IFMODEL_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn ifmodel_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ifmodel");
    cmd.env("HOME", "/tmp/ifmodel-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/ifmodel-cli-test-nonexistent")
        .env_remove("IFMODEL_CONFIG")
        .env_remove("IFMODEL_SECTION")
        .env_remove("IFMODEL_DEFAULTS__OUTPUT")
        .env_remove("IFMODEL_DEFAULTS__COLOR")
        .env_remove("IFMODEL_DOCUMENT__SECTION_PATH")
        .env_remove("IFMODEL_DOCUMENT__STRICT")
        .env_remove("RUST_LOG");
    cmd
}

fn write_doc(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = ifmodel_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    ifmodel_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("ethernet")
            .and(predicate::str::contains("interfaces"))
            .and(predicate::str::contains("check")),
    );
}

#[test]
fn test_version_flag() {
    ifmodel_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ifmodel"));
}

#[test]
fn test_completions_bash() {
    ifmodel_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── interfaces ──────────────────────────────────────────────────────

#[test]
fn test_list_json_nests_units() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    let output = ifmodel_cmd()
        .args(["interfaces", "list", path_arg(&doc), "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["name"], "ethernet1/1");
    assert_eq!(list[0]["type"], "layer3");
    assert_eq!(list[0]["layer3_addresses"][1], "198.51.100.1/24");
    assert_eq!(list[1]["sub_interfaces"]["ethernet1/2.10"]["tag"], 10);
    assert_eq!(list[2]["type"], "virtual-wire");
}

#[test]
fn test_list_plain_all_includes_units() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["interfaces", "list", path_arg(&doc), "--all", "-o", "plain"])
        .assert()
        .success()
        .stdout("ethernet1/1\nethernet1/2\nethernet1/2.10\nethernet1/3\n");
}

#[test]
fn test_list_type_filter() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["interfaces", "list", path_arg(&doc), "--type", "virtual-wire", "-o", "plain"])
        .assert()
        .success()
        .stdout("ethernet1/3\n");
}

#[test]
fn test_list_unknown_type_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["interfaces", "list", path_arg(&doc), "--type", "layer7"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("layer7"));
}

#[test]
fn test_list_table_shows_addresses() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["interfaces", "list", path_arg(&doc)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("203.0.113.2/30, 198.51.100.1/24")
                .and(predicate::str::contains("uplink")),
        );
}

#[test]
fn test_show_sub_interface() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["interfaces", "show", path_arg(&doc), "ethernet1/2.10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Parent:      ethernet1/2")
                .and(predicate::str::contains("Unit:        10"))
                .and(predicate::str::contains("Addresses:   10.10.0.1/24")),
        );
}

#[test]
fn test_show_unknown_interface_is_not_found() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["interfaces", "show", path_arg(&doc), "ethernet9/9"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ethernet9/9"));
}

#[test]
fn test_custom_section_path() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(
        &dir,
        "fragment.xml",
        r#"<network><interface><ethernet>
             <entry name="ethernet1/8"><tap/></entry>
           </ethernet></interface></network>"#,
    );

    ifmodel_cmd()
        .args([
            "interfaces",
            "list",
            path_arg(&doc),
            "--section",
            "interface/ethernet",
            "-o",
            "plain",
        ])
        .assert()
        .success()
        .stdout("ethernet1/8\n");
}

// ── Load failures ───────────────────────────────────────────────────

#[test]
fn test_missing_section_is_data_error() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "empty.xml", "<config><devices/></config>");

    ifmodel_cmd()
        .args(["interfaces", "list", path_arg(&doc)])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Ethernet section"));
}

#[test]
fn test_malformed_document_is_data_error() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "broken.xml", "<config><devices></config>");

    ifmodel_cmd()
        .args(["check", path_arg(&doc)])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("broken.xml"));
}

#[test]
fn test_unnamed_entry_is_data_error() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "unnamed.xml", "<ethernet><entry><layer3/></entry></ethernet>");

    ifmodel_cmd()
        .args(["check", path_arg(&doc)])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("name"));
}

// ── check ───────────────────────────────────────────────────────────

#[test]
fn test_check_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "dup.xml", DUPLICATED);

    ifmodel_cmd()
        .args(["check", path_arg(&doc)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("duplicate-interface")
                .and(predicate::str::contains("1 interface(s)")),
        );
}

#[test]
fn test_check_strict_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "dup.xml", DUPLICATED);

    ifmodel_cmd()
        .args(["check", path_arg(&doc), "--strict"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("1 configuration warning(s)"));
}

#[test]
fn test_check_strict_from_environment() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "dup.xml", DUPLICATED);

    ifmodel_cmd()
        .env("IFMODEL_DOCUMENT__STRICT", "true")
        .args(["check", path_arg(&doc)])
        .assert()
        .code(6);
}

#[test]
fn test_check_clean_document_strict_passes() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "running-config.xml", RUNNING_CONFIG);

    ifmodel_cmd()
        .args(["check", path_arg(&doc), "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No warnings"));
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    ifmodel_cmd()
        .args(["config", "path", "--config", "/tmp/ifmodel-alt/config.toml"])
        .assert()
        .success()
        .stdout("/tmp/ifmodel-alt/config.toml\n");
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    ifmodel_cmd()
        .args(["config", "init", "--config", path_arg(&path)])
        .assert()
        .success();
    assert!(path.exists());

    ifmodel_cmd()
        .args(["config", "init", "--config", path_arg(&path)])
        .assert()
        .code(6);

    ifmodel_cmd()
        .args(["config", "init", "--force", "--config", path_arg(&path)])
        .assert()
        .success();
}

#[test]
fn test_config_show_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        "config.toml",
        "[document]\nsection_path = \"network/interface/ethernet\"\n",
    );

    ifmodel_cmd()
        .args(["config", "show", "--config", path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("section_path = \"network/interface/ethernet\""));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_init_uses_platform_path_without_flag() {
    let dir = TempDir::new().unwrap();

    ifmodel_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("ifmodel/config.toml").exists());

    ifmodel_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = \"table\""));
}
