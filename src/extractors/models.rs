// src/extractors/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything recovered from one resume. Absent scalars serialize as `null`,
/// empty lists as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: BTreeSet<String>, // sorted and deduplicated by construction
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: Option<String>,
    pub start_date: Option<String>, // MM/YYYY
    pub end_date: Option<String>,   // MM/YYYY
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>, // YYYY
    pub end_date: Option<String>,   // YYYY or "Present"
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: Vec<String>,
}

impl ProjectEntry {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Vec::new(),
        }
    }
}
