//! Source rules for the client crate.
//!
//! Production code runs in the visitor's browser, where a panic blanks the
//! page. Each rule names a pattern and the only modules allowed to contain
//! it; an empty allow-list bans the pattern outright. Comment lines are not
//! scanned.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    /// Path prefixes (relative to the crate root) where the pattern is fine.
    allowed_in: &'static [&'static str],
    hint: &'static str,
}

const PANICS: &[Rule] = &[
    Rule { pattern: ".unwrap()", allowed_in: &[], hint: "propagate with `?` or fall back explicitly" },
    Rule { pattern: ".expect(", allowed_in: &[], hint: "propagate with `?` or fall back explicitly" },
    Rule { pattern: "panic!(", allowed_in: &[], hint: "return an error instead" },
    Rule { pattern: "unreachable!(", allowed_in: &[], hint: "make the state unrepresentable" },
    Rule { pattern: "todo!(", allowed_in: &[], hint: "finish the stub" },
    Rule { pattern: "unimplemented!(", allowed_in: &[], hint: "finish the stub" },
];

const SWALLOWED_ERRORS: &[Rule] = &[
    Rule {
        pattern: "let _ =",
        allowed_in: &[],
        hint: "log the failure, or use cfg_attr(allow(unused_variables)) for SSR stubs",
    },
    Rule {
        pattern: ".ok()",
        allowed_in: &["src/util/", "src/net/"],
        hint: "only browser reads and response sniffing may collapse errors to Option",
    },
    Rule { pattern: "#[allow(dead_code)]", allowed_in: &[], hint: "delete unused code" },
];

const LAYERING: &[Rule] = &[
    Rule { pattern: "gloo_net", allowed_in: &["src/net/"], hint: "call the studio API through net::api" },
    Rule {
        pattern: "web_sys::window()",
        allowed_in: &["src/util/"],
        hint: "read window geometry through util::dom",
    },
    Rule { pattern: "println!", allowed_in: &[], hint: "use leptos::logging" },
    Rule { pattern: "eprintln!", allowed_in: &[], hint: "use leptos::logging" },
    Rule { pattern: "dbg!(", allowed_in: &[], hint: "use leptos::logging" },
    Rule { pattern: "thread::sleep", allowed_in: &[], hint: "blocks the wasm thread; use gloo_timers" },
];

/// Production sources as (crate-relative path with `/` separators, content).
fn production_sources() -> Vec<(String, String)> {
    let mut paths = Vec::new();
    collect_rs_files(Path::new("src"), &mut paths);
    paths
        .into_iter()
        .filter_map(|path| {
            let rel = path.to_string_lossy().replace('\\', "/");
            if rel.ends_with("_test.rs") {
                return None;
            }
            fs::read_to_string(&path).ok().map(|content| (rel, content))
        })
        .collect()
}

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

/// Every `path:line` breaking one of `rules`.
fn violations(rules: &[Rule]) -> Vec<String> {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found; run from the client crate root");

    let mut found = Vec::new();
    for rule in rules {
        for (path, content) in &sources {
            if rule.allowed_in.iter().any(|prefix| path.starts_with(prefix)) {
                continue;
            }
            for (idx, line) in content.lines().enumerate() {
                if line.trim_start().starts_with("//") {
                    continue;
                }
                if line.contains(rule.pattern) {
                    found.push(format!("  {path}:{}: `{}` ({})", idx + 1, rule.pattern, rule.hint));
                }
            }
        }
    }
    found
}

fn assert_clean(rules: &[Rule]) {
    let found = violations(rules);
    assert!(found.is_empty(), "{} violation(s):\n{}", found.len(), found.join("\n"));
}

#[test]
fn no_panicking_calls() {
    assert_clean(PANICS);
}

#[test]
fn errors_are_not_swallowed_outside_adapters() {
    assert_clean(SWALLOWED_ERRORS);
}

#[test]
fn browser_and_http_access_stay_in_their_modules() {
    assert_clean(LAYERING);
}

#[test]
fn scanner_sees_the_adapter_modules() {
    let sources = production_sources();
    for expected in ["src/net/api.rs", "src/util/dom.rs", "src/state/booking.rs"] {
        assert!(sources.iter().any(|(path, _)| path == expected), "missing {expected}");
    }
}
