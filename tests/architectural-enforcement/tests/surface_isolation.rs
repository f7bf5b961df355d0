//! Integration Test: Engine Surface Isolation
//!
//! **Policy**: `studio-core` is the headless engine. It MUST NOT depend on
//! CLI or terminal crates, and it MUST NOT install a global tracing
//! subscriber. Surfaces (the `kigo` binary today, anything else tomorrow)
//! own argument parsing, terminal output, and logging initialization.

use std::fs;
use std::path::{Path, PathBuf};

/// Crates that belong to a surface, never to the engine
const SURFACE_CRATES: &[&str] = &["clap", "ratatui", "crossterm", "tracing-subscriber"];

fn core_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../studio/core")
}

#[test]
fn test_core_manifest_has_no_surface_dependencies() {
    let manifest_path = core_dir().join("Cargo.toml");
    let manifest = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", manifest_path.display()));

    let mut violations = Vec::new();
    for (idx, line) in manifest.lines().enumerate() {
        let code_part = line.split('#').next().unwrap_or(line);
        for krate in SURFACE_CRATES {
            if code_part.trim_start().starts_with(krate) {
                violations.push(format!(
                    "{}:{} - surface crate in engine manifest: {}",
                    manifest_path.display(),
                    idx + 1,
                    line.trim()
                ));
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Surface crates found in the engine manifest!");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\nThe engine is driven by surfaces; it must not pull in");
        eprintln!("argument parsing, terminal, or subscriber crates itself.");
        panic!(
            "\nFound {} surface dependency violation(s) in studio-core.",
            violations.len()
        );
    }
}

#[test]
fn test_core_source_never_touches_surface_crates() {
    let violations = find_surface_usage(&core_dir().join("src"));

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Surface crate usage found in engine source!");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ The engine logs through `tracing` macros only;");
        eprintln!("   the binary installs the subscriber.");
        panic!(
            "\nFound {} surface usage violation(s) in studio-core.",
            violations.len()
        );
    }
}

/// Source-level markers of surface crates leaking into the engine
const SURFACE_MARKERS: &[&str] = &[
    "use clap",
    "clap::",
    "use ratatui",
    "ratatui::",
    "use crossterm",
    "crossterm::",
    "tracing_subscriber",
];

fn find_surface_usage(dir: &Path) -> Vec<String> {
    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let content = match fs::read_to_string(entry.path()) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for (idx, line) in content.lines().enumerate() {
            // Skip comments
            let code_part = line.split("//").next().unwrap_or(line);

            for marker in SURFACE_MARKERS {
                if code_part.contains(marker) {
                    violations.push(format!(
                        "{}:{} - {}",
                        entry.path().display(),
                        idx + 1,
                        line.trim()
                    ));
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_dir_resolves() {
        assert!(
            core_dir().join("Cargo.toml").exists(),
            "engine manifest should be reachable from the test crate"
        );
    }
}
