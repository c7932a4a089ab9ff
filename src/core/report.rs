//! Markdown reports.
//!
//! Every builder returns a complete document: title, table of contents,
//! overview and one section per finding category. File sections follow path
//! order, so the output is stable for a given input.

use std::fmt::Write;
use std::path::Path;

use crate::core::diff::{self, FileSets};

const PASS: &str = "✓";

/// Duplicate-key report for one file.
pub fn audit(file: &Path, duplicates: &[String], total_keys: usize) -> String {
    let mut doc = String::new();

    title(&mut doc, "Audit", &["Overview", "Duplicate Keys"]);
    section(&mut doc, "Overview");
    field(&mut doc, "File", &format!("`{}`", file.display()));
    field(&mut doc, "Total Keys", &total_keys.to_string());
    field(&mut doc, "Duplicate Keys", &duplicates.len().to_string());

    section(&mut doc, "Duplicate Keys");
    if duplicates.is_empty() {
        line(&mut doc, &format!("{} No duplicate keys found.", PASS));
    } else {
        key_table(&mut doc, duplicates);
    }

    doc
}

/// Missing-key report across several files.
pub fn compare(sets: &FileSets) -> String {
    let mut doc = String::new();

    title(&mut doc, "Comparison", &["Overview", "Files Analyzed", "Missing Keys"]);
    section(&mut doc, "Overview");
    field(&mut doc, "Files Compared", &sets.len().to_string());

    section(&mut doc, "Files Analyzed");
    for (path, set) in sets {
        let _ = writeln!(doc, "- `{}` ({} keys)", path.display(), set.len());
    }
    doc.push('\n');

    missing_section(&mut doc, sets);
    doc
}

/// Schema validation report.
pub fn validate(file: &Path, schema: &Path, errors: &[String]) -> String {
    let mut doc = String::new();

    title(&mut doc, "Validation", &["Overview", "Validation Errors"]);
    section(&mut doc, "Overview");
    field(&mut doc, "File", &format!("`{}`", file.display()));
    field(&mut doc, "Schema", &format!("`{}`", schema.display()));
    field(&mut doc, "Errors Found", &errors.len().to_string());

    section(&mut doc, "Validation Errors");
    if errors.is_empty() {
        line(&mut doc, &format!("{} Validation passed! No errors found.", PASS));
    } else {
        doc.push_str("| Error |\n|-------|\n");
        for error in errors {
            let _ = writeln!(doc, "| {} |", cell(error));
        }
        doc.push('\n');
    }

    doc
}

/// Combined duplicate and missing-key report over discovered files.
pub fn doctor(sets: &FileSets) -> String {
    let mut doc = String::new();

    title(
        &mut doc,
        "Doctor",
        &["Overview", "Files Analyzed", "Duplicates", "Missing Keys"],
    );
    section(&mut doc, "Overview");
    field(&mut doc, "Files Analyzed", &sets.len().to_string());

    let duplicates: Vec<(&Path, Vec<String>)> = sets
        .iter()
        .map(|(path, set)| (path.as_path(), diff::find_duplicates(set.records())))
        .collect();

    section(&mut doc, "Files Analyzed");
    for ((path, dups), set) in duplicates.iter().zip(sets.values()) {
        let _ = writeln!(doc, "### `{}`\n", path.display());
        let _ = writeln!(doc, "- **Total Keys:** {}", set.len());
        let _ = writeln!(doc, "- **Duplicate Keys:** {}\n", dups.len());
    }

    section(&mut doc, "Duplicates");
    let mut any = false;
    for (path, dups) in duplicates.iter().filter(|(_, d)| !d.is_empty()) {
        any = true;
        let _ = writeln!(doc, "### `{}`\n", path.display());
        key_table(&mut doc, dups);
    }
    if !any {
        line(&mut doc, &format!("{} No duplicate keys found in any file.", PASS));
    }

    missing_section(&mut doc, sets);
    doc
}

fn title(doc: &mut String, kind: &str, contents: &[&str]) {
    let _ = writeln!(doc, "# Environment Variables {} Report\n", kind);
    doc.push_str("## Table of Contents\n");
    for entry in contents {
        let _ = writeln!(doc, "- [{}](#{})", entry, anchor(entry));
    }
    doc.push('\n');
}

fn section(doc: &mut String, name: &str) {
    let _ = writeln!(doc, "## {}\n", name);
}

fn field(doc: &mut String, name: &str, value: &str) {
    let _ = writeln!(doc, "**{}:** {}\n", name, value);
}

fn line(doc: &mut String, text: &str) {
    let _ = writeln!(doc, "{}\n", text);
}

fn key_table(doc: &mut String, keys: &[String]) {
    doc.push_str("| Key |\n|-----|\n");
    for key in keys {
        let _ = writeln!(doc, "| `{}` |", cell(key));
    }
    doc.push('\n');
}

/// Escape text for a table cell; a bare `|` would end the cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn missing_section(doc: &mut String, sets: &FileSets) {
    section(doc, "Missing Keys");
    for (path, missing) in diff::missing_by_file(sets) {
        let _ = writeln!(doc, "### Missing in `{}`\n", path.display());
        if missing.is_empty() {
            line(doc, &format!("{} No missing keys.", PASS));
        } else {
            key_table(doc, &missing);
        }
    }
}

fn anchor(heading: &str) -> String {
    heading.to_lowercase().replace(' ', "-")
}
