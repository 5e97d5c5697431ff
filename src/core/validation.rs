//! # Input Validation
//!
//! Checks a chosen file before it may be uploaded: it must exist, be a PDF,
//! and weigh no more than [`MAX_PDF_BYTES`].
//!
//! MIME detection looks at content first (`%PDF-` magic within the first
//! [`MAGIC_WINDOW`] bytes, as PDF readers accept) and only falls back to the
//! extension when the content is not a PDF. A file named `.pdf` that lacks
//! the magic bytes is reported as `application/octet-stream`.
//!
//! The selection is a snapshot. [`check_pdf_bytes`] re-applies the same
//! rules to the bytes actually read for upload.

use log::debug;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub const PDF_MIME: &str = "application/pdf";

/// Upload limit: 120 KB.
pub const MAX_PDF_BYTES: u64 = 120 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// How far into the file the PDF header may start.
pub const MAGIC_WINDOW: usize = 1024;

/// A file the user has picked, described by what validation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl SelectedFile {
    /// Reads metadata and the leading bytes of `path`.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
        }

        let mut head = Vec::with_capacity(MAGIC_WINDOW);
        fs::File::open(path)?
            .take(MAGIC_WINDOW as u64)
            .read_to_end(&mut head)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = detect_mime(path, &head);
        debug!("Selected {} ({}, {} bytes)", path.display(), mime, metadata.len());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            mime: mime.to_string(),
            size: metadata.len(),
        })
    }
}

/// Guess the MIME type of a file from its leading bytes and extension.
pub fn detect_mime(path: &Path, head: &[u8]) -> &'static str {
    if has_pdf_magic(head) {
        return PDF_MIME;
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "txt" | "md" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

fn has_pdf_magic(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(MAGIC_WINDOW)];
    head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Generate was requested with neither a file nor text.
    NoInput,
    NoFile,
    NotPdf { mime: String },
    TooLarge { size: u64 },
    Unreadable { path: PathBuf, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoInput => write!(f, "Please select a PDF file or enter some text."),
            ValidationError::NoFile => write!(f, "Please select a PDF file."),
            ValidationError::NotPdf { mime } => {
                write!(f, "Only PDF files are accepted (got {mime}).")
            }
            ValidationError::TooLarge { size } => write!(
                f,
                "File exceeds the 120 KB size limit ({:.1} KB).",
                *size as f64 / 1024.0
            ),
            ValidationError::Unreadable { path, reason } => {
                write!(f, "Cannot read {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_file(file: Option<&SelectedFile>) -> Result<(), ValidationError> {
    let file = file.ok_or(ValidationError::NoFile)?;

    if file.mime != PDF_MIME {
        return Err(ValidationError::NotPdf {
            mime: file.mime.clone(),
        });
    }
    if file.size > MAX_PDF_BYTES {
        return Err(ValidationError::TooLarge { size: file.size });
    }
    Ok(())
}

/// Validate file contents as read at upload time.
pub fn check_pdf_bytes(bytes: &[u8]) -> Result<(), ValidationError> {
    if !has_pdf_magic(bytes) {
        return Err(ValidationError::NotPdf {
            mime: "application/octet-stream".to_string(),
        });
    }
    let size = bytes.len() as u64;
    if size > MAX_PDF_BYTES {
        return Err(ValidationError::TooLarge { size });
    }
    Ok(())
}
