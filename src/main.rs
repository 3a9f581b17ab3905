// src/main.rs
mod document;
mod extractors;
mod storage;
mod utils;

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use utils::AppError;
use utils::error::DocumentError;
use extractors::{extract_fields, ResumeRecord};
use storage::StorageManager;

/// Command Line Interface for the resume field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resume file (.pdf, .txt, .md) or a directory of resumes
    input: PathBuf,

    /// Output directory for extracted JSON records
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Re-process documents whose JSON output already exists
    #[arg(long)]
    overwrite: bool,

    /// Also write every record from this run into one JSON array file
    #[arg(long)]
    combined: Option<PathBuf>,

    /// Print records to stdout instead of writing per-document files
    #[arg(long)]
    stdout: bool,

    /// Log the cleaned document text at debug level
    #[arg(long)]
    dump_text: bool,
}

/// Supported documents directly inside `dir`, sorted by file name.
fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && document::is_supported(&path) {
            documents.push(path);
        } else {
            tracing::trace!("Ignoring {}", path.display());
        }
    }
    documents.sort();
    Ok(documents)
}

fn process_document(path: &Path, dump_text: bool) -> Result<ResumeRecord, AppError> {
    let text = document::load_document(path)?;

    if dump_text {
        tracing::debug!("Cleaned text for {}:\n{}", path.display(), text);
    }

    Ok(extract_fields(&text))
}

/// Per-document storage, or None when records go to stdout. The output directory is
/// only created when something will be written there.
fn open_storage(output_dir: &Path, to_stdout: bool) -> Result<Option<StorageManager>, AppError> {
    if to_stdout {
        return Ok(None);
    }
    Ok(Some(StorageManager::new(output_dir)?))
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Resolve the documents to process
    let documents = if args.input.is_dir() {
        collect_documents(&args.input)?
    } else if args.input.exists() {
        vec![args.input.clone()]
    } else {
        return Err(DocumentError::NotFound(args.input.clone()).into());
    };

    tracing::info!("Found {} document(s) to process", documents.len());

    if documents.is_empty() {
        return Err(AppError::Config(format!(
            "No supported documents found in {}",
            args.input.display()
        )));
    }

    // 4. Initialize storage
    let storage = open_storage(&args.output_dir, args.stdout)?;

    // 5. Process each document
    let mut records = Vec::new();
    let mut success_count = 0;
    let mut skipped_count = 0;
    let mut failure_count = 0;

    for path in &documents {
        if let Some(storage) = &storage {
            if !args.overwrite && storage.exists(path) {
                tracing::info!("Skipping {} (already processed)", path.display());
                skipped_count += 1;
                continue;
            }
        }

        tracing::info!("Processing {}", path.display());

        let record = match process_document(path, args.dump_text) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Failed to process {}: {}", path.display(), e);
                failure_count += 1;
                continue;
            }
        };

        match &storage {
            Some(storage) => {
                if let Err(e) = storage.save_record(path, &record) {
                    tracing::error!("Failed to save record for {}: {}", path.display(), e);
                    failure_count += 1;
                    continue;
                }
            }
            None => println!("{}", storage::to_pretty_json(&record)?),
        }

        success_count += 1;
        records.push(record);
    }

    if let Some(combined) = &args.combined {
        storage::save_batch(combined, &records)?;
    }

    tracing::info!(
        "Processing finished. Success: {}, Skipped: {}, Failures: {}",
        success_count,
        skipped_count,
        failure_count
    );

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to extract fields from any of {} document(s)",
            failure_count
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_mode_leaves_output_dir_alone() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("output");

        assert!(open_storage(&output_dir, true).unwrap().is_none());
        assert!(!output_dir.exists());

        assert!(open_storage(&output_dir, false).unwrap().is_some());
        assert!(output_dir.is_dir());
    }
}
