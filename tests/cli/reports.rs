//! Tests for the reporting commands: `audit`, `compare`, `doctor`, `validate`.

use crate::support::*;

const SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "properties": {
    "DB_HOST": {"type": "string"},
    "PORT": {"type": "string"}
  },
  "required": ["DB_HOST", "PORT"]
}"#;

#[test]
fn test_audit_prints_report() {
    let t = Test::with_files(&[(".env", DUPLICATE_ENV)]);

    let output = t.run(&["audit", ".env"]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.starts_with("# Environment Variables Audit Report"));
    assert!(out.contains("**Total Keys:** 3"));
    assert!(out.contains("**Duplicate Keys:** 1"));
    assert!(out.contains("| `API_KEY` |"));
    assert!(!out.contains("| `API_URL` |"));
}

#[test]
fn test_audit_clean_file() {
    let t = Test::with_files(&[(".env", SAMPLE_ENV)]);

    let output = t.run(&["audit", ".env"]);
    assert_success(&output);
    assert_stdout_contains(&output, "No duplicate keys found.");
}

#[test]
fn test_audit_output_file() {
    let t = Test::with_files(&[(".env", DUPLICATE_ENV)]);

    let output = t.run(&["audit", ".env", "-o", "audit.md"]);
    assert_success(&output);
    assert_stdout_contains(&output, "report saved to");
    assert_stdout_excludes(&output, "# Environment Variables");

    assert!(t.read("audit.md").contains("| `API_KEY` |"));
}

#[test]
fn test_audit_save_uses_configured_dir() {
    let t = Test::with_files(&[
        (".env", DUPLICATE_ENV),
        (".envdoc.toml", "[report]\ndir = \"reports\"\n"),
    ]);

    assert_success(&t.run(&["audit", ".env", "--save"]));

    let saved: Vec<String> = std::fs::read_dir(t.path("reports"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("envdoc-audit-"), "got {}", saved[0]);
    assert!(saved[0].ends_with(".md"));
    // envdoc-audit-YYYYMMDD-HHMMSS.md
    assert_eq!(saved[0].len(), "envdoc-audit-".len() + 15 + 3);
}

#[test]
fn test_save_and_output_conflict() {
    let t = Test::with_files(&[(".env", "A=1\n")]);

    assert_failure(&t.run(&["audit", ".env", "--save", "-o", "x.md"]));
    assert!(!t.exists("x.md"));
}

#[test]
fn test_malformed_config_fails_save() {
    let t = Test::with_files(&[(".env", "A=1\n"), (".envdoc.toml", "[report\n")]);

    let output = t.run(&["audit", ".env", "--save"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_compare_reports_missing_keys() {
    let t = Test::with_files(&[(".env", "A=1\nB=2\n"), (".env.prod", "B=2\nC=3\n")]);

    let output = t.run(&["compare", ".env", ".env.prod"]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("**Files Compared:** 2"));
    assert!(out.contains("- `.env` (2 keys)"));

    let env = out.find("### Missing in `.env`\n").unwrap();
    let prod = out.find("### Missing in `.env.prod`").unwrap();
    assert!(out[env..prod].contains("| `C` |"));
    assert!(out[prod..].contains("| `A` |"));
}

#[test]
fn test_compare_requires_two_files() {
    let t = Test::with_files(&[(".env", "A=1\n")]);

    assert_failure(&t.run(&["compare", ".env"]));
}

#[test]
fn test_compare_missing_file() {
    let t = Test::with_files(&[(".env", "A=1\n")]);

    let output = t.run(&["compare", ".env", ".env.nope"]);
    assert_failure(&output);
    assert_stderr_contains(&output, ".env.nope");
}

#[test]
fn test_doctor_discovers_files() {
    let t = Test::with_files(&[
        (".env", "A=1\nA=2\nB=1\n"),
        (".env.dev", "A=1\n"),
        (".env.json", "{}"),
        (".env.local", "Z=1\n"),
        (".envdoc.toml", "[discovery]\nexclude = [\".local\"]\n"),
    ]);

    let output = t.run(&["doctor"]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("# Environment Variables Doctor Report"));
    assert!(out.contains("**Files Analyzed:** 2"));
    assert!(out.contains(".env.dev`"));
    assert!(!out.contains(".env.json"));
    assert!(!out.contains(".env.local"));
    assert!(out.contains("| `A` |"));
    assert!(out.contains("| `B` |"));
}

#[test]
fn test_doctor_dir_option() {
    let t = Test::with_files(&[("app/.env", "A=1\n"), ("app/.env.test", "B=1\n")]);

    let output = t.run(&["doctor", "--dir", "app"]);
    assert_success(&output);
    assert_stdout_contains(&output, "**Files Analyzed:** 2");
}

#[test]
fn test_doctor_no_files() {
    let t = Test::new();

    let output = t.run(&["doctor"]);
    assert_success(&output);
    assert_stderr_contains(&output, "no env files found");
}

#[test]
fn test_validate_reports_discrepancies() {
    let t = Test::with_files(&[(".env", "DB_HOST=x\nEXTRA=1\n"), ("schema.json", SCHEMA)]);

    let output = t.run(&["validate", ".env", "schema.json"]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("**Errors Found:** 2"));
    assert!(out.contains("| Missing required key: PORT |"));
    assert!(out.contains("| Key not in schema: EXTRA |"));
}

#[test]
fn test_validate_check_fails_on_discrepancies() {
    let t = Test::with_files(&[(".env", "DB_HOST=x\n"), ("schema.json", SCHEMA)]);

    let output = t.run(&["validate", ".env", "schema.json", "--check"]);
    assert_failure(&output);
    assert_stdout_contains(&output, "Missing required key: PORT");
    assert_stderr_contains(&output, "validation failed: 1 discrepancies found");
}

#[test]
fn test_validate_check_passes() {
    let t = Test::with_files(&[(".env", "DB_HOST=x\nPORT=1\n"), ("schema.json", SCHEMA)]);

    let output = t.run(&["validate", ".env", "schema.json", "--check"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Validation passed!");
}

#[test]
fn test_validate_missing_schema() {
    let t = Test::with_files(&[(".env", "A=1\n")]);

    let output = t.run(&["validate", ".env", "schema.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}

#[test]
fn test_validate_malformed_schema() {
    let t = Test::with_files(&[(".env", "A=1\n"), ("schema.json", "{oops")]);

    let output = t.run(&["validate", ".env", "schema.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse schema");
}
