// src/storage/mod.rs
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::models::ResumeRecord;
use crate::utils::error::StorageError;

/// Serializes `value` as JSON indented by four spaces. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, StorageError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| StorageError::SerializationError(e.to_string()))
}

/// Saves several records as one top-level JSON array at `path`.
pub fn save_batch<P: AsRef<Path>>(path: P, records: &[ResumeRecord]) -> Result<PathBuf, StorageError> {
    let file_path = path.as_ref().to_path_buf();

    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(StorageError::IoError)?;
    }

    let json = to_pretty_json(records)?;
    fs::write(&file_path, json).map_err(StorageError::IoError)?;

    tracing::info!("Saved {} records to {}", records.len(), file_path.display());

    Ok(file_path)
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// `<base_dir>/<source stem>.json`
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        self.base_dir.join(format!("{}.json", stem))
    }

    /// Whether a record for `source` has already been written.
    pub fn exists(&self, source: &Path) -> bool {
        self.output_path_for(source).exists()
    }

    /// Saves one record as a JSON object next to the other outputs
    pub fn save_record(&self, source: &Path, record: &ResumeRecord) -> Result<PathBuf, StorageError> {
        let file_path = self.output_path_for(source);
        let json = to_pretty_json(record)?;

        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());

        Ok(file_path)
    }
}
