//! Study Guide Document Extraction
//!
//! Turns an input file into a single flattened string of document text.
//!
//! # Supported formats
//!
//! | Extension | Kind | Extraction |
//! |---|---|---|
//! | `.pdf` | [`DocumentKind::Pdf`] | `pdf-extract`, whole document |
//! | `.txt` | [`DocumentKind::Text`] | UTF-8 (lossy) |
//! | `.csv` | [`DocumentKind::Csv`] | one line per data row, cells joined by spaces |
//!
//! Anything else is rejected with [`ExtractionError::UnsupportedType`]. A
//! document whose text is only whitespace is rejected with
//! [`ExtractionError::NoText`] so no generation is attempted on it.
//!
//! # Example
//!
//! ```
//! use studyguide_document::{extract_text, DocumentKind};
//!
//! let doc = extract_text(b"Photosynthesis converts light into energy.", "notes.txt").unwrap();
//! assert_eq!(doc.kind, DocumentKind::Text);
//! assert!(doc.text.contains("Photosynthesis"));
//! ```

#![warn(missing_docs)]

mod pdf;
mod tabular;
mod txt;

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while extracting document text
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The file extension is not one of pdf, txt, csv
    #[error("Unsupported file type: '{0}' (expected pdf, txt, or csv)")]
    UnsupportedType(String),

    /// The PDF could not be parsed
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// The CSV could not be parsed
    #[error("CSV extraction failed: {0}")]
    Csv(String),

    /// Extraction succeeded but produced only whitespace
    #[error("Could not extract text from '{0}'")]
    NoText(String),

    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input format, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Plain text
    Text,
    /// Comma-separated values
    Csv,
}

impl DocumentKind {
    /// Infer the kind from a filename's extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "txt" => Ok(DocumentKind::Text),
            "csv" => Ok(DocumentKind::Csv),
            _ => Err(ExtractionError::UnsupportedType(ext)),
        }
    }

    /// Lowercase name ("pdf", "txt", "csv")
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Text => "txt",
            DocumentKind::Csv => "csv",
        }
    }
}

/// Text extracted from one input file
#[derive(Debug, Clone)]
pub struct Document {
    /// Original filename (no directory)
    pub filename: String,

    /// Detected input format
    pub kind: DocumentKind,

    /// The flattened document text
    pub text: String,
}

impl Document {
    /// Number of characters in the extracted text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Extract text from in-memory file contents
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<Document, ExtractionError> {
    let kind = DocumentKind::from_filename(filename)?;

    let text = match kind {
        DocumentKind::Pdf => pdf::extract_pdf(bytes)?,
        DocumentKind::Text => txt::extract_txt(bytes),
        DocumentKind::Csv => tabular::extract_csv(bytes)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText(filename.to_string()));
    }

    debug!("Extracted {} chars from {} ({})", text.len(), filename, kind.as_str());

    Ok(Document {
        filename: filename.to_string(),
        kind,
        text,
    })
}

/// Read a file from disk and extract its text
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, ExtractionError> {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    // Reject unsupported types before touching the disk
    DocumentKind::from_filename(&filename)?;

    let bytes = fs::read(path)?;
    let document = extract_text(&bytes, &filename)?;

    info!(
        "Loaded '{}': {} characters of {} text",
        document.filename,
        document.char_count(),
        document.kind.as_str()
    );

    Ok(document)
}
