//! Hygiene — enforces coding standards at test time.
//!
//! Scans the rain crate's production sources for antipatterns that violate
//! project standards. Each pattern has a budget (zero). If you must add
//! one, you have to fix an existing one first — the budget never grows.

use std::fs;
use std::path::Path;

/// Pattern / budget pairs checked against `src/`.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the page.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0),
    (".ok()", 0),
    // Style / structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` siblings.
fn source_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn source_antipattern_budgets() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut report = Vec::new();
    for (pattern, budget) in BUDGETS {
        let mut count = 0;
        let mut hits = Vec::new();
        for file in &files {
            let in_file = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if in_file > 0 {
                count += in_file;
                hits.push(format!("  {}: {in_file}", file.path));
            }
        }
        if count > *budget {
            report.push(format!(
                "`{pattern}` budget exceeded: found {count}, max {budget}\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(report.is_empty(), "\n{}", report.join("\n"));
}
