// src/document/cleaner.rs
use once_cell::sync::Lazy;
use regex::Regex;

static HORIZONTAL_SPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]+").expect("Failed to compile HORIZONTAL_SPACE_RE")
});

static EXCESS_NEWLINES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("Failed to compile EXCESS_NEWLINES_RE")
});

/// Normalizes raw extracted text into the canonical form the extractors expect.
///
/// Runs of spaces/tabs become one space, every line is trimmed, and more than one
/// blank line in a row collapses to a single blank line. Lines are trimmed before
/// the collapse so that `clean_text(clean_text(x)) == clean_text(x)`.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = HORIZONTAL_SPACE_RE.replace_all(text, " ");
    let text = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    let text = EXCESS_NEWLINES_RE.replace_all(&text, "\n\n");

    text.trim().to_string()
}
