// src/domain/slug/format.rs
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Normalise arbitrary text into a URL-safe slug.
///
/// The result only ever contains `[a-z0-9-]`, never starts or ends with a
/// hyphen and never contains two hyphens in a row. Empty input (or input made
/// only of stripped characters) yields an empty string.
#[must_use]
pub fn format_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}
