//! Production Panic Enforcement
//!
//! Library and binary code must propagate errors instead of unwrapping, and
//! must not silence dead code. Code after the `#[cfg(test)]` marker of a file
//! is exempt.

use std::fs;
use std::path::{Path, PathBuf};

const BANNED_PATTERNS: [(&str, &str); 3] = [
    (".unwrap()", "Propagate the error with `?` instead"),
    (".expect(", "Propagate the error with `?` instead"),
    ("#[allow(dead_code)]", "Remove the unused code instead"),
];

/// A banned pattern found in production code
#[derive(Debug)]
struct PanicViolation {
    file_path: String,
    line_number: usize,
    message: String,
}

/// Scans production sources of the workspace crates
struct PanicChecker {
    violations: Vec<PanicViolation>,
    files_checked: usize,
}

impl PanicChecker {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
            files_checked: 0,
        }
    }

    fn workspace_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".."))
    }

    /// Source files of every `showreel-*` crate except this one
    fn find_source_files(root: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            if path.is_dir() && name.starts_with("showreel-") && name != "showreel-tests" {
                Self::collect_rust_files(&path.join("src"), &mut files)?;
            }
        }
        files.sort();
        Ok(files)
    }

    fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                Self::collect_rust_files(&path, files)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
        Ok(())
    }

    /// Check one file's contents, stopping at its test module
    fn check_content(&mut self, file_path: &Path, content: &str) {
        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }

            for &(pattern, message) in &BANNED_PATTERNS {
                if trimmed.contains(pattern) {
                    self.violations.push(PanicViolation {
                        file_path: file_path.display().to_string(),
                        line_number: line_num + 1,
                        message: format!("Found `{pattern}`. {message}"),
                    });
                }
            }
        }
        self.files_checked += 1;
    }

    fn report_violations(&self) -> bool {
        for violation in &self.violations {
            println!(
                "{}:{} - {}",
                violation.file_path, violation.line_number, violation.message
            );
        }
        println!("  Files checked: {}", self.files_checked);
        self.violations.is_empty()
    }
}

#[test]
fn test_production_code_does_not_panic_on_errors() {
    let mut checker = PanicChecker::new();
    let files = PanicChecker::find_source_files(&PanicChecker::workspace_root()).unwrap();
    assert!(!files.is_empty(), "no workspace sources found");

    for file in files {
        let content = fs::read_to_string(&file).unwrap();
        checker.check_content(&file, &content);
    }

    assert!(checker.report_violations(), "production code unwraps errors");
}

#[test]
fn test_checker_stops_at_test_module() {
    let mut checker = PanicChecker::new();
    const CODE: &str = r#"
fn parse(raw: &str) -> Option<u16> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    fn check() { parse("1").unwrap(); }
}
"#;
    checker.check_content(Path::new("clean.rs"), CODE);
    assert!(checker.violations.is_empty());
}

#[test]
fn test_checker_flags_banned_patterns() {
    let mut checker = PanicChecker::new();
    const CODE: &str = r#"
#[allow(dead_code)]
fn port(raw: &str) -> u16 {
    // raw.parse().unwrap() in a comment is fine
    raw.parse().expect("port")
}
fn host(raw: &str) -> u8 { raw.parse().unwrap() }
"#;
    checker.check_content(Path::new("dirty.rs"), CODE);
    assert_eq!(checker.violations.len(), 3);
    assert_eq!(checker.violations[0].line_number, 2);
}
