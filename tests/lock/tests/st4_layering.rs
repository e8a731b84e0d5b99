//! ST-004 lock tests: layering of the workspace.
//!
//! Strategies never pace, sleep, or reach into the harness: presentation
//! timing belongs to observers. The kernel never reaches into search.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Scan all `.rs` files under `dir` for forbidden patterns in non-comment lines.
fn scan(dir: &Path, forbidden: &[&str]) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    walk(dir, forbidden, &mut violations);
    violations
}

fn walk(dir: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, forbidden, violations);
        }
    }
}

fn check_file(path: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in forbidden {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}

fn assert_clean(crate_dir: &str, forbidden: &[&str]) {
    let dir = workspace_root().join(crate_dir).join("src");
    assert!(dir.is_dir(), "{} does not exist", dir.display());
    let violations = scan(&dir, forbidden);
    if !violations.is_empty() {
        let mut msg = format!("{crate_dir} contains forbidden references:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

// ACCEPTANCE: ST4-NO-PACING-IN-STRATEGIES
#[test]
fn search_crate_has_no_pacing_or_harness_refs() {
    assert_clean(
        "search",
        &["thread::sleep", "stepwise_harness", "Instant::now", "std::io::stdout"],
    );
}

// ACCEPTANCE: ST4-KERNEL-LEAF
#[test]
fn kernel_does_not_depend_on_upper_layers() {
    assert_clean("kernel", &["stepwise_search", "stepwise_harness"]);
}
