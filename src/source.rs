//! Turns an input path into contract text.
//!
//! Extraction never fails the run: unreadable or unsupported documents
//! yield an explanatory placeholder that flows through the analysis like
//! any other text.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path argument meaning "read from standard input".
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Docx,
    Doc,
    Txt,
}

impl DocumentType {
    /// Declared type from the file extension; anything unrecognised is read
    /// as plain text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => DocumentType::Pdf,
            Some("docx") => DocumentType::Docx,
            Some("doc") => DocumentType::Doc,
            _ => DocumentType::Txt,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Pdf => write!(f, "pdf"),
            DocumentType::Docx => write!(f, "docx"),
            DocumentType::Doc => write!(f, "doc"),
            DocumentType::Txt => write!(f, "txt"),
        }
    }
}

/// One document to analyze.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name: the path as given, or `<stdin>`.
    pub name: String,
    pub text: String,
}

/// Read every input in order. Only stdin errors are fatal.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading contract from stdin")?;
            documents.push(Document {
                name: "<stdin>".to_string(),
                text,
            });
        } else {
            documents.push(Document {
                name: path.display().to_string(),
                text: extract_text(path, DocumentType::from_path(path)),
            });
        }
    }
    Ok(documents)
}

/// Raw text for a file of the declared type, or a placeholder explaining
/// why no text could be extracted.
pub fn extract_text(path: &Path, doc_type: DocumentType) -> String {
    match doc_type {
        DocumentType::Txt => match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "text extraction failed");
                format!(
                    "Error extracting text: {e}. Using fallback: you can paste text directly."
                )
            }
        },
        DocumentType::Pdf => {
            tracing::warn!(path = %path.display(), "PDF extraction is not supported");
            "Could not extract PDF text. Try converting to text format first.".to_string()
        }
        DocumentType::Docx | DocumentType::Doc => {
            tracing::warn!(path = %path.display(), %doc_type, "Word extraction is not supported");
            "Could not extract Word document text. Try saving as .txt first.".to_string()
        }
    }
}
