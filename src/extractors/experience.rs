// src/extractors/experience.rs
use crate::extractors::models::ExperienceEntry;
use crate::extractors::patterns::{is_bullet, strip_bullet, EXPERIENCE_DATE_RE, EXPERIENCE_LABELS};
use crate::extractors::sections::section_body;

/// Parses a `Title | Company | YYYY - YYYY` role line. Returns None for anything
/// without both a pipe and a year range.
fn parse_role_line(line: &str) -> Option<ExperienceEntry> {
    if !line.contains('|') {
        return None;
    }
    let caps = EXPERIENCE_DATE_RE.captures(line)?;

    let end_date = if caps[2].eq_ignore_ascii_case("present") {
        "Present".to_string()
    } else {
        caps[2].to_string()
    };

    let mut parts = line
        .split('|')
        .map(str::trim)
        .map(|part| (!part.is_empty()).then(|| part.to_string()));

    Some(ExperienceEntry {
        title: parts.next().flatten(),
        company: parts.next().flatten(),
        start_date: Some(caps[1].to_string()),
        end_date: Some(end_date),
        description: Vec::new(),
    })
}

/// Roles from the EXPERIENCE (or WORK EXPERIENCE / PROFILE) section, each with the
/// bullet lines that follow it.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let mut experience = Vec::new();
    let mut current_role: Option<ExperienceEntry> = None;

    for line in section_body(text, EXPERIENCE_LABELS) {
        if is_bullet(line) {
            match current_role.as_mut() {
                Some(role) => role.description.push(strip_bullet(line).to_string()),
                None => tracing::trace!("Dropping bullet before any role: '{}'", line),
            }
            continue;
        }

        if let Some(role) = parse_role_line(line) {
            experience.extend(current_role.replace(role));
        }
    }

    experience.extend(current_role);
    experience
}
