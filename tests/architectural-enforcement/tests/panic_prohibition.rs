//! Integration Test: Panic Prohibition
//!
//! **Policy**: Production code MUST NOT panic. Errors propagate as `Result`
//! and are handled at the surface; generation failures degrade to the
//! placeholder reference instead of aborting.
//!
//! Test code is exempt: everything after a file's `#[cfg(test)]` marker is
//! skipped.

use std::fs;
use std::path::{Path, PathBuf};

#[test]
fn test_no_panics_in_production_code() {
    let mut violations = Vec::new();

    check_directory(&workspace_path("studio/core/src"), &mut violations);
    check_directory(&workspace_path("studio/cli/src"), &mut violations);

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Panic paths found in production code!");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n❌ FORBIDDEN in production code:");
        eprintln!("  - .unwrap(), .expect()");
        eprintln!("  - panic!(), unreachable!(), todo!(), unimplemented!()");
        eprintln!("\n✅ REQUIRED instead:");
        eprintln!("  - Result + `?`, anyhow::Context for annotation");
        eprintln!("  - .unwrap_or() / .unwrap_or_else() for true defaults");
        eprintln!("\n✅ ACCEPTABLE:");
        eprintln!("  - Test code (after #[cfg(test)])");
        panic!(
            "\nFound {} panic violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

/// Call patterns that introduce a panic path
const PANIC_MARKERS: &[&str] = &[
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
];

fn workspace_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..").join(relative)
}

fn check_directory(dir: &Path, violations: &mut Vec<String>) {
    assert!(dir.exists(), "expected source directory {}", dir.display());

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            check_file(entry.path(), violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (idx, line) in production_lines(&content).iter().enumerate() {
        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        for marker in PANIC_MARKERS {
            if code_part.contains(marker) {
                violations.push(format!(
                    "{}:{} - panic path: {}",
                    path.display(),
                    idx + 1,
                    line.trim()
                ));
            }
        }
    }
}

/// Lines before the file's test module; `#[cfg(test)]` starts test territory
fn production_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .take_while(|line| !line.trim_start().starts_with("#[cfg(test)]"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let content = "fn a() {}\n#[cfg(test)]\nmod tests {\n    fn b() { x.unwrap() }\n}\n";
        let lines = production_lines(content);
        assert_eq!(lines, vec!["fn a() {}"]);
    }

    #[test]
    fn test_detects_unwrap_but_not_unwrap_or() {
        let mut violations = Vec::new();
        let dir = std::env::temp_dir().join("panic-prohibition-selftest");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("sample.rs");
        fs::write(
            &file,
            "fn f() {\n    let a = opt.unwrap_or(0);\n    let b = opt.unwrap();\n}\n",
        )
        .unwrap();

        check_file(&file, &mut violations);
        fs::remove_file(&file).unwrap();

        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("opt.unwrap()"));
    }

    #[test]
    fn test_comments_are_ignored() {
        let mut violations = Vec::new();
        let dir = std::env::temp_dir().join("panic-prohibition-selftest");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("commented.rs");
        fs::write(&file, "fn f() {\n    // never .unwrap() here\n}\n").unwrap();

        check_file(&file, &mut violations);
        fs::remove_file(&file).unwrap();

        assert!(violations.is_empty());
    }
}
