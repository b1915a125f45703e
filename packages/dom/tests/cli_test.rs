//! Tests for the `xfa-dom` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("localeset")
        .join(name)
}

fn xfa_dom() -> Command {
    let mut cmd = Command::cargo_bin("xfa-dom").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_validate_valid_file() {
    xfa_dom()
        .arg("validate")
        .arg(fixture("locales.xml"))
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid:"));
}

#[test]
fn test_validate_lenient_reports_warnings() {
    xfa_dom()
        .arg("validate")
        .arg(fixture("overflow.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("dropped <subform> under <locale>"));
}

#[test]
fn test_validate_strict_fails() {
    xfa_dom()
        .arg("validate")
        .arg(fixture("overflow.xml"))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 4 <datePattern>"));
}

#[test]
fn test_schema_single_kind() {
    xfa_dom()
        .args(["schema", "datePatterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("datePattern      0..4"));
}

#[test]
fn test_schema_unknown_kind() {
    xfa_dom()
        .args(["schema", "subform"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown element <subform>"));
}

#[test]
fn test_format_date() {
    xfa_dom()
        .arg("format")
        .arg(fixture("locales.xml"))
        .args(["--locale", "en_US", "--style", "full", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout("Tuesday, March 5, 2024\n");
}

#[test]
fn test_format_rejects_bad_locale_name() {
    xfa_dom()
        .arg("format")
        .arg(fixture("locales.xml"))
        .args(["--locale", "english"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid locale name"));
}

#[test]
fn test_format_missing_locale() {
    xfa_dom()
        .arg("format")
        .arg(fixture("locales.xml"))
        .args(["--locale", "fr_FR", "--date", "2024-03-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locale 'fr_FR' not found"));
}

#[test]
fn test_dump_yaml() {
    xfa_dom()
        .arg("dump")
        .arg(fixture("locales.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("packet: localeSet"));
}
