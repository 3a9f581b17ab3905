// src/document/mod.rs
pub mod cleaner;
pub mod loader;

pub use loader::{is_supported, load_document};
