//! Source hygiene for the client crate, enforced at test time.
//!
//! Two kinds of rule. Banned patterns may not appear anywhere in
//! production source: this crate sits between a flaky backend and the
//! UI, so every failure has to surface as a typed error rather than a
//! panic or a silently dropped `Result`. Boundary patterns may appear
//! only in the one file that owns the concern: raw HTTP and envelope
//! decoding belong to `net/http.rs`, lock handling to the session
//! store. Everything else goes through those seams.

use std::fs;
use std::path::Path;

/// Patterns with a zero budget anywhere under `src/`.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on error; propagate ApiError instead"),
    (".expect(", "panics on error; propagate ApiError instead"),
    ("panic!(", "crashes the caller"),
    ("unreachable!(", "crashes the caller"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "discards a Result without inspecting it"),
    (".ok()", "discards the error branch"),
    ("#[allow(dead_code)]", "unused code should be deleted"),
];

/// Patterns allowed only in the file that owns the concern.
const FENCED: &[(&str, &str, &str)] = &[
    ("reqwest::Client", "src/net/http.rs", "one shared HTTP client"),
    (".json::<", "src/net/http.rs", "response decoding is the interceptor's job"),
    ("serde_json::from_value", "src/net/http.rs", "envelope unwrapping is the interceptor's job"),
    ("RwLock", "src/session/store.rs", "the token store owns all locking"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

/// Production `.rs` files only; `*_test.rs` siblings are exempt.
fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().replace('\\', "/");
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(index, _)| (file.path.clone(), index + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn render(found: &[(String, usize)]) -> String {
    found
        .iter()
        .map(|(path, line)| format!("  {path}:{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn banned_patterns_do_not_appear() {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    let mut report = String::new();
    for (pattern, reason) in BANNED {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push_str(&format!("`{pattern}` ({reason}):\n{}\n", render(&found)));
        }
    }
    assert!(report.is_empty(), "banned patterns in production source:\n{report}");
}

#[test]
fn fenced_patterns_stay_in_their_module() {
    let files = source_files();
    let mut report = String::new();
    for (pattern, home, reason) in FENCED {
        let strays: Vec<_> = hits(&files, pattern)
            .into_iter()
            .filter(|(path, _)| path != home)
            .collect();
        if !strays.is_empty() {
            report.push_str(&format!(
                "`{pattern}` outside {home} ({reason}):\n{}\n",
                render(&strays)
            ));
        }
    }
    assert!(report.is_empty(), "layering violations:\n{report}");
}
