//! Source hygiene checks for the backdrop crate.
//!
//! Production sources under `src/` are scanned for patterns that panic or
//! swallow errors. Every pattern has a budget of zero. A second check keeps
//! the browser bindings confined to the modules that talk to the DOM, so the
//! dot field, palette and animator stay testable on the host.

use std::fs;
use std::path::Path;

/// Pattern, budget, and what a hit means.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "explicit panic"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "drops the error side of a Result"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Modules allowed to reference browser crates.
const BROWSER_MODULES: &[&str] = &["engine.rs", "render.rs", "scheduler.rs"];

const BROWSER_CRATES: &[&str] = &["web_sys", "js_sys", "gloo_render"];

struct SourceFile {
    name: String,
    content: String,
}

/// Production `.rs` files directly under `src/`, test siblings excluded.
fn source_files() -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir(Path::new("src")) else {
        return Vec::new();
    };
    let mut files: Vec<SourceFile> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "rs"))
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            if name.ends_with("_test.rs") {
                return None;
            }
            let content = fs::read_to_string(&path).ok()?;
            Some(SourceFile { name, content })
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

/// Lines containing `pattern`, skipping `//` comment lines.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim_start().starts_with("//"))
                .filter(move |(_, line)| line.contains(pattern))
                .map(move |(idx, line)| format!("  {}:{}: {}", file.name, idx + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.name == "lib.rs"), "run from the canvas crate root");
    assert!(files.iter().all(|f| !f.name.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, budget, meaning) in BUDGETS {
        let found = hits(&files, pattern);
        if found.len() > *budget {
            report.push(format!(
                "`{pattern}` ({meaning}): found {}, max {budget}\n{}",
                found.len(),
                found.join("\n")
            ));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn browser_bindings_stay_in_dom_modules() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !BROWSER_MODULES.contains(&f.name.as_str()))
        .collect();
    let leaks: Vec<String> = BROWSER_CRATES.iter().flat_map(|krate| hits(&files, krate)).collect();
    assert!(leaks.is_empty(), "browser crates referenced outside DOM modules:\n{}", leaks.join("\n"));
}

#[test]
fn every_module_opens_with_a_doc_header() {
    let missing: Vec<String> = source_files()
        .into_iter()
        .filter(|f| !f.content.trim_start().starts_with("//!"))
        .map(|f| format!("  {}", f.name))
        .collect();
    assert!(missing.is_empty(), "modules without a `//!` header:\n{}", missing.join("\n"));
}
