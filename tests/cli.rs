//! Integration tests for the simple-folio CLI binary.
//!
//! None of these reach GitHub: `build` is pointed at a closed local port so
//! the listing fails fast and the fallback path is exercised.

#![allow(deprecated)]

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn cli() -> Command {
    Command::cargo_bin("simple-folio").unwrap()
}

fn site_with_config(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.config.json"), content).unwrap();
    tmp
}

/// Inner markup of the `#projects-grid` element. The grid holds no nested
/// `div`, so the first closing `</div>` ends it.
fn projects_grid_content(html: &str) -> &str {
    let open = html
        .find(r#"id="projects-grid""#)
        .expect("page has no projects grid");
    let start = open + html[open..].find('>').unwrap() + 1;
    let end = start + html[start..].find("</div>").unwrap();
    &html[start..end]
}

#[test]
fn help_lists_commands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("gen-config"));
}

#[test]
fn version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_fails() {
    cli().assert().failure();
}

#[test]
fn gen_config_prints_valid_json() {
    let output = cli().arg("gen-config").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["username"], "NeilsBored");
    assert_eq!(value["name"], "Shane John");
    assert!(value["featured"].as_array().unwrap().is_empty());
}

#[test]
fn check_resolves_configured_profile() {
    let site = site_with_config(
        r#"{ "username": "acme", "name": "Ada Lovelace", "featured": ["engine"] }"#,
    );
    cli()
        .args(["check", "--source"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Username: acme"))
        .stdout(predicate::str::contains("Heading: Hi, I'm Ada"))
        .stdout(predicate::str::contains("Footer: Ada Lovelace"))
        .stdout(predicate::str::contains("Featured: engine"));
}

#[test]
fn check_without_config_uses_defaults() {
    let site = TempDir::new().unwrap();
    cli()
        .args(["check", "--source"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("Heading: Hi, I'm Shane"))
        .stdout(predicate::str::contains("Footer: Shane John"));
}

#[test]
fn check_with_invalid_config_uses_defaults() {
    let site = site_with_config("{ not json");
    cli()
        .args(["check", "--source"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Username: NeilsBored"));
}

#[test]
fn build_writes_page_with_fallback_when_api_unreachable() {
    let site = site_with_config(r#"{ "name": "Ada Lovelace", "email": "ada@example.com" }"#);
    let out = site.path().join("dist");

    cli()
        .args(["build", "--api-base", UNREACHABLE_API, "--source"])
        .arg(site.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unable to load projects at this time.",
        ));

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(
        projects_grid_content(&html),
        "<p>Unable to load projects at this time.</p>"
    );
    assert!(!html.contains(r#"class="project-card""#));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("mailto:ada@example.com"));
}

#[test]
fn build_logs_fetch_failure_to_stderr() {
    let site = TempDir::new().unwrap();
    cli()
        .args(["build", "--log-level", "error", "--api-base", UNREACHABLE_API, "--source"])
        .arg(site.path())
        .arg("--output")
        .arg(site.path().join("dist"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unable to load projects"));
}
