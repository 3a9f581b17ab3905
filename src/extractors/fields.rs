// src/extractors/fields.rs
use crate::extractors::certifications::extract_certifications;
use crate::extractors::contact::{extract_email, extract_location, extract_name, extract_phone};
use crate::extractors::education::extract_education;
use crate::extractors::experience::extract_experience;
use crate::extractors::models::ResumeRecord;
use crate::extractors::projects::extract_projects;
use crate::extractors::skills::extract_skills;

/// Runs every field extractor once over the cleaned resume text.
///
/// Never fails: fields that cannot be found come back as `None` or empty lists.
pub fn extract_fields(text: &str) -> ResumeRecord {
    let record = ResumeRecord {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        location: extract_location(text),
        skills: extract_skills(text),
        education: extract_education(text),
        experience: extract_experience(text),
        projects: extract_projects(text),
        certifications: extract_certifications(text),
    };

    tracing::debug!(
        "Extracted fields: name={}, email={}, phone={}, location={}, skills={}, education={}, experience={}, projects={}, certifications={}",
        record.name.is_some(),
        record.email.is_some(),
        record.phone.is_some(),
        record.location.is_some(),
        record.skills.len(),
        record.education.len(),
        record.experience.len(),
        record.projects.len(),
        record.certifications.len(),
    );

    record
}
