// src/extractors/contact.rs
//! Contact details near the top of a resume: name, email, phone and location.

use crate::extractors::patterns::{
    mentions_keyword, non_empty_lines, COMMA_SPACING_RE, EMAIL_RE, ISOLATED_LETTER_RE,
    LOCATION_KEYWORDS, LOCATION_NOISE_RE, MULTI_SPACE_RE, NAME_BLACKLIST, PHONE_CANDIDATE_RE,
    SKILLS_DB,
};

const NAME_SCAN_LINES: usize = 6;
const LOCATION_SCAN_LINES: usize = 10;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 13;

/// First email-looking substring in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First digit run that looks like a phone number and holds 10 to 13 digits.
/// The match is returned as written (separators kept), trimmed.
pub fn extract_phone(text: &str) -> Option<String> {
    let normalized = text.replace(['–', '—'], "-");

    PHONE_CANDIDATE_RE
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .find(|candidate| {
            let digits = candidate.chars().filter(|c| c.is_numeric()).count();
            (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
        })
        .map(|candidate| candidate.trim().to_string())
}

fn contains_blacklisted(lower: &str) -> bool {
    NAME_BLACKLIST.iter().any(|word| lower.contains(word))
}

fn contains_skill_keyword(lower: &str) -> bool {
    SKILLS_DB.iter().any(|(keyword, _)| mentions_keyword(lower, keyword))
}

/// Best guess at the candidate's name.
///
/// First looks for a 2-4 word line among the first six lines that mentions no
/// blacklisted word or skill keyword. Failing that, accepts a single capitalized
/// alphabetic word when it is the very first line.
pub fn extract_name(text: &str) -> Option<String> {
    let lines = non_empty_lines(text);

    for line in lines.iter().take(NAME_SCAN_LINES) {
        let lower = line.to_lowercase();
        if contains_blacklisted(&lower) || contains_skill_keyword(&lower) {
            continue;
        }

        let word_count = line.split_whitespace().count();
        if !(2..=4).contains(&word_count) {
            continue;
        }

        let letters_only: String = line
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .collect();
        if letters_only.chars().any(|c| c != ' ') {
            tracing::trace!("Name matched multi-word line: '{}'", line);
            return Some(letters_only.trim().to_string());
        }
    }

    let first = lines.first()?;
    let lower_first = first.to_lowercase();
    let is_single_word_name = first.chars().all(char::is_alphabetic)
        && first.chars().next().is_some_and(char::is_uppercase)
        && first.chars().count() >= 3
        && !SKILLS_DB.iter().any(|(keyword, _)| *keyword == lower_first)
        && !contains_blacklisted(&lower_first);

    if is_single_word_name {
        tracing::trace!("Name fell back to first line: '{}'", first);
        return Some(first.to_string());
    }

    None
}

/// Scrubs contact noise from a line and returns it if it still reads like "City, Region".
fn clean_location_line(line: &str) -> Option<String> {
    let line = EMAIL_RE.replace_all(line, "");
    let line = PHONE_CANDIDATE_RE.replace_all(&line, "");
    let line = LOCATION_NOISE_RE.replace_all(&line, " ");
    let line = ISOLATED_LETTER_RE.replace_all(&line, " ");
    let line = MULTI_SPACE_RE.replace_all(&line, " ");
    let line = COMMA_SPACING_RE.replace_all(&line, ", ");

    let location = line.trim_matches(|c: char| c == ' ' || c == ',');
    if location.contains(',') && location.chars().count() >= 5 {
        Some(location.to_string())
    } else {
        None
    }
}

/// First of the top ten lines that names a known country/state and survives cleanup.
pub fn extract_location(text: &str) -> Option<String> {
    non_empty_lines(text)
        .into_iter()
        .take(LOCATION_SCAN_LINES)
        .filter(|line| {
            let lower = line.to_lowercase();
            LOCATION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .find_map(clean_location_line)
}
