// src/document/loader.rs
use std::fs;
use std::path::Path;

use crate::document::cleaner::clean_text;
use crate::utils::error::DocumentError;

const PDF_EXTENSIONS: &[&str] = &["pdf"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

// pdf-extract separates pages with form feeds
const PAGE_BREAK: char = '\x0C';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Classifies a path by its (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if PDF_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Pdf)
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::PlainText)
        } else {
            None
        }
    }
}

pub fn is_supported(path: &Path) -> bool {
    DocumentKind::from_path(path).is_some()
}

/// Joins non-empty pages with a single newline.
fn join_pages(raw: &str) -> String {
    raw.split(PAGE_BREAK)
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn read_pdf_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path)?;
    let raw = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| DocumentError::Pdf {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(join_pages(&raw))
}

/// Reads a resume from disk and returns its cleaned text.
pub fn load_document(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;

    let raw = match kind {
        DocumentKind::Pdf => read_pdf_text(path)?,
        DocumentKind::PlainText => fs::read_to_string(path)?,
    };

    let text = clean_text(&raw);
    if text.is_empty() {
        tracing::warn!(
            "No text layer found in {} (scanned or image-only document?)",
            path.display()
        );
    } else {
        tracing::debug!("Loaded {} chars of text from {}", text.len(), path.display());
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_document_kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("cv.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.txt")),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(DocumentKind::from_path(Path::new("cv.docx")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_join_pages_drops_blank_pages() {
        assert_eq!(join_pages("page one\x0C  \x0Cpage two"), "page one\npage two");
        assert_eq!(join_pages("single"), "single");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_document(&PathBuf::from("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        fs::write(&path, "binary-ish").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_plain_text_is_cleaned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "  Jane   Doe  \n\n\n\nSKILLS\n\tPython ").unwrap();

        let text = load_document(&path).unwrap();
        assert_eq!(text, "Jane Doe\n\nSKILLS\nPython");
    }
}
