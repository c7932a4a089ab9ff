//! Tests for `to` and `from`.

use crate::support::*;

#[test]
fn test_to_json_default_output() {
    let t = Test::with_files(&[(".env", "B=2\nA=1\nB=3\n")]);

    let output = t.run(&["to", "json", ".env"]);
    assert_success(&output);

    assert_eq!(t.read(".json"), "{\n  \"A\": \"1\",\n  \"B\": \"3\"\n}\n");
}

#[test]
fn test_to_json_custom_output() {
    let t = Test::with_files(&[(".env.production", "KEY=value\n")]);

    assert_success(&t.run(&["to", "json", ".env.production", "-o", "prod.json"]));

    let value: serde_json::Value = serde_json::from_str(&t.read("prod.json")).unwrap();
    assert_eq!(value["KEY"], "value");
}

#[test]
fn test_to_yaml_arranges_and_quotes() {
    let t = Test::with_files(&[(
        ".env.dev",
        "DB_URL=postgres://h:5432/db\nDEBUG=true\nDB_HOST=localhost\nEMPTY=\n",
    )]);

    assert_success(&t.run(&["to", "yaml", ".env.dev"]));

    assert_eq!(
        t.read(".env.yaml"),
        "DB_HOST: localhost\nDB_URL: \"postgres://h:5432/db\"\n\nDEBUG: \"true\"\n\nEMPTY: \"\"\n"
    );
}

#[test]
fn test_to_rejects_unknown_format() {
    let t = Test::with_files(&[(".env", "A=1\n")]);

    assert_failure(&t.run(&["to", "xml", ".env"]));
}

#[test]
fn test_from_json() {
    let t = Test::with_files(&[("vars.json", r#"{"DB_PORT": "5432", "APP": "web", "DB_HOST": "h"}"#)]);

    let output = t.run(&["from", "vars.json"]);
    assert_success(&output);
    assert_stdout_contains(&output, "converted 3 keys");

    assert_eq!(t.read("vars.env"), "APP=web\n\nDB_HOST=h\nDB_PORT=5432\n");
}

#[test]
fn test_from_yaml_uppercase_extension() {
    let t = Test::with_files(&[("vars.YML", "B: two\nA: \"one\"\n")]);

    assert_success(&t.run(&["from", "vars.YML", "-o", ".env"]));

    assert_eq!(t.read(".env"), "A=one\n\nB=two\n");
}

#[test]
fn test_yaml_roundtrip_through_cli() {
    let t = Test::with_files(&[(".env", SAMPLE_ENV)]);

    assert_success(&t.run(&["to", "yaml", ".env", "-o", "vars.yaml"]));
    assert_success(&t.run(&["from", "vars.yaml", "-o", ".env.back"]));

    // Comments do not survive the conversion; keys, values and grouping do.
    assert_eq!(
        t.read(".env.back"),
        "APP_DEBUG=true\nAPP_NAME=demo\n\nDB_HOST=localhost\nDB_PORT=5432\n"
    );
}

#[test]
fn test_from_refuses_overwrite() {
    let t = Test::with_files(&[
        ("vars.json", r#"{"A": "new"}"#),
        (".env", "A=old\nSECRET=keep\n"),
    ]);

    let output = t.run(&["from", "vars.json", "-o", ".env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_stderr_contains(&output, "--force");
    assert_eq!(t.read(".env"), "A=old\nSECRET=keep\n");

    assert_success(&t.run(&["from", "vars.json", "-o", ".env", "--force"]));
    assert_eq!(t.read(".env"), "A=new\n");
}

#[test]
fn test_from_unsupported_extension() {
    let t = Test::with_files(&[("vars.toml", "A = 1\n")]);

    let output = t.run(&["from", "vars.toml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported file format");
}

#[test]
fn test_from_nested_json_fails() {
    let t = Test::with_files(&[("vars.json", r#"{"A": {"B": "c"}}"#)]);

    let output = t.run(&["from", "vars.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse JSON");
    assert!(!t.exists("vars.env"));
}

#[test]
fn test_from_missing_file() {
    let t = Test::new();

    let output = t.run(&["from", "vars.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}
