// src/extractors/certifications.rs
use crate::extractors::patterns::{strip_bullet, CERTIFICATIONS_LABELS};
use crate::extractors::sections::section_body;

// Shorter leftovers are usually stray bullets or page artifacts
const MIN_CERTIFICATION_LEN: usize = 5;

pub fn extract_certifications(text: &str) -> Vec<String> {
    section_body(text, CERTIFICATIONS_LABELS)
        .into_iter()
        .map(strip_bullet)
        .filter(|cert| cert.chars().count() >= MIN_CERTIFICATION_LEN)
        .map(str::to_string)
        .collect()
}
