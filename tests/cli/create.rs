//! Tests for `create-example` and `create-schema`.

use crate::support::*;

#[test]
fn test_create_example_default_output() {
    let t = Test::with_files(&[(".env", SAMPLE_ENV)]);

    let output = t.run(&["create-example", ".env"]);
    assert_success(&output);
    assert_stdout_contains(&output, ".env.example");

    assert_eq!(
        t.read(".env.example"),
        "# Database port\nDB_PORT=\nAPP_NAME=\n# Database host\nDB_HOST=\nAPP_DEBUG=\n"
    );
    // Source untouched
    assert_eq!(t.read(".env"), SAMPLE_ENV);
}

#[test]
fn test_create_example_custom_output() {
    let t = Test::with_files(&[(".env", "A=1\n")]);

    assert_success(&t.run(&["create-example", ".env", "template.env"]));

    assert_eq!(t.read("template.env"), "A=\n");
}

#[test]
fn test_create_example_refuses_overwrite() {
    let t = Test::with_files(&[(".env", "A=1\n"), (".env.example", "KEEP=1\n")]);

    let output = t.run(&["create-example", ".env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_stderr_contains(&output, "--force");
    assert_eq!(t.read(".env.example"), "KEEP=1\n");

    assert_success(&t.run(&["create-example", ".env", "--force"]));
    assert_eq!(t.read(".env.example"), "A=\n");
}

#[test]
fn test_create_example_missing_input() {
    let t = Test::new();

    let output = t.run(&["create-example", ".env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
    assert!(!t.exists(".env.example"));
}

#[test]
fn test_create_schema() {
    let t = Test::with_files(&[(".env", SAMPLE_ENV)]);

    assert_success(&t.run(&["create-schema", ".env"]));

    let schema: serde_json::Value =
        serde_json::from_str(&t.read(".env.schema.json")).unwrap();
    assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["DB_HOST"]["type"], "string");
    assert_eq!(schema["properties"]["DB_HOST"]["description"], "Database host");
    assert!(schema["properties"]["APP_NAME"].get("description").is_none());
    assert_eq!(
        schema["required"],
        serde_json::json!(["DB_PORT", "APP_NAME", "DB_HOST", "APP_DEBUG"])
    );
}

#[test]
fn test_created_schema_validates_source() {
    let t = Test::with_files(&[(".env", SAMPLE_ENV)]);

    assert_success(&t.run(&["create-schema", ".env", "schema.json"]));

    let output = t.run(&["validate", ".env", "schema.json", "--check"]);
    assert_success(&output);
    assert_stdout_contains(&output, "**Errors Found:** 0");
}
