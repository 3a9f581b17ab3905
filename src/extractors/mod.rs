// src/extractors/mod.rs
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod fields;
pub mod models;
pub mod patterns;
pub mod projects;
pub mod sections;
pub mod skills;

// Re-export key extraction types for convenience
pub use fields::extract_fields;
pub use models::ResumeRecord;
