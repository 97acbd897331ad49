//! CLI command integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn rql_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("rql").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn compile_prints_report_and_inputs() {
    rql_cmd()
        .args([
            "--query=there are 2 alphanumeric groups separated by slash and not dot",
            "--input=ab12/cd34",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# running on <there are 2 alphanumeric groups separated by slash and not dot>",
        ))
        .stdout(predicate::str::contains(
            "## expressions for <2 alphanumeric groups separated by slash> mode <AFFIRMATIVE>",
        ))
        .stdout(predicate::str::contains(
            "## expressions for <not dot> mode <NEGATIVE>",
        ))
        .stdout(predicate::str::contains("QUANTITY: 2"))
        .stdout(predicate::str::contains("# inputs :\n- ab12/cd34"));
}

#[test]
fn repeated_queries_each_reported() {
    rql_cmd()
        .args(["--query", "there is dot", "--query", "there can_be slash"])
        .args(["--input", "a.b", "--input", "a/b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# running on <there is dot>"))
        .stdout(predicate::str::contains("mode <OPTIONAL>"))
        .stdout(predicate::str::contains("- a.b\n- a/b"));
}

#[test]
fn json_format() {
    let output = rql_cmd()
        .args(["--query=there are 3 numeric groups and not slash", "--input=x"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["inputs"][0], "x");
    let query = &value["queries"][0];
    assert_eq!(query["tree"]["clauses"].as_array().unwrap().len(), 2);
    assert_eq!(query["tree"]["clauses"][1]["mode"], "NEGATIVE");
    assert_eq!(query["attributes"][0]["quantity"], 3);
    assert_eq!(query["attributes"][0]["identifier"], "groups");
}

#[test]
fn missing_query_and_input() {
    rql_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error (300) both query and input are required parameters",
        ));
}

#[test]
fn missing_input() {
    rql_cmd()
        .args(["--query=there is dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error (300) input is required parameter"));
}

#[test]
fn missing_query() {
    rql_cmd()
        .args(["--input=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error (300) query is required parameter"));
}

#[test]
fn unknown_flag_rejected() {
    rql_cmd()
        .args(["--query=dot", "--input=x", "--color=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn empty_expression_fails() {
    rql_cmd()
        .args(["--query=hello world", "--input=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expression can't be empty"));
}

#[test]
fn debug_logs_to_stderr() {
    rql_cmd()
        .args(["--query=there are groups!", "--input=x", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dropped unrecognized word"))
        .stdout(predicate::str::contains("dropped").not());
}

#[test]
fn keywords_listing() {
    rql_cmd()
        .arg("--keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("and           EMPLACER"))
        .stdout(predicate::str::contains("slash         SYMBOL (/)"));
}

#[test]
fn keywords_is_exclusive() {
    rql_cmd()
        .args(["--keywords", "--query=dot"])
        .assert()
        .failure();
}
