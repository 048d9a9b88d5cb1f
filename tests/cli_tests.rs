// End-to-end checks of the regra binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn fields_lists_the_whole_catalog() {
    let mut cmd = Command::cargo_bin("regra").unwrap();
    cmd.arg("fields");
    cmd.assert()
        .success()
        .stdout(contains("nome").and(contains("telefone")).and(contains("q2g")));
}

#[test]
fn check_accepts_a_valid_value() {
    let mut cmd = Command::cargo_bin("regra").unwrap();
    cmd.args(["check", "cpf", "123.456.789-09"]);
    cmd.assert().success().stdout(contains("valid"));
}

#[test]
fn check_rejects_an_invalid_value_with_the_violation_message() {
    let mut cmd = Command::cargo_bin("regra").unwrap();
    cmd.args(["check", "cpf", "111.111.11-11"]);
    cmd.assert()
        .code(1)
        .stdout(contains("invalid").and(contains("Regex:")));
}

#[test]
fn check_treats_an_omitted_value_as_empty() {
    // Every default field is optional, so the empty string validates.
    let mut cmd = Command::cargo_bin("regra").unwrap();
    cmd.args(["check", "nome"]);
    cmd.assert().success().stdout(contains("valid"));
}

#[test]
fn check_reports_unknown_fields_as_a_diagnostic() {
    let mut cmd = Command::cargo_bin("regra").unwrap();
    cmd.args(["check", "rg", "12345"]);
    cmd.assert().code(2).stderr(contains("unknown field 'rg'"));
}
