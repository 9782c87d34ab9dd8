//! Upload intake boundary.
//!
//! The file is accepted by extension only (no magic-number sniffing) and its
//! bytes are never read in this repository; parsing belongs to a real
//! extraction pipeline outside this scope. The 10 MB ceiling is advisory:
//! an oversized file is accepted with a warning, not rejected.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::UploadError;

/// Advisory upload size ceiling (10 MB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// File types the picker accepts, matched on extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Pdf,
    Docx,
    Xlsx,
    Xls,
}

impl SupportedFormat {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = file_name.rsplit_once('.').map(|(_, ext)| ext)?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }
}

/// A committed file selection. The payload is opaque to the whole system.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: Uuid,
    pub file_name: String,
    pub format: SupportedFormat,
    pub payload: Bytes,
    pub received_at: DateTime<Utc>,
}

impl UploadedFile {
    /// Accepts a file selection, gating on the extension and logging an
    /// advisory warning past the size ceiling.
    pub fn new(file_name: impl Into<String>, payload: Bytes) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        let format = SupportedFormat::from_file_name(&file_name).ok_or_else(|| {
            UploadError::UnsupportedExtension {
                file_name: file_name.clone(),
            }
        })?;

        if payload.len() > MAX_UPLOAD_BYTES {
            warn!(
                "'{file_name}' is {:.2} MB, over the 10 MB advisory limit; accepting anyway",
                payload.len() as f64 / 1024.0 / 1024.0
            );
        }

        let file = Self {
            id: Uuid::new_v4(),
            file_name,
            format,
            payload,
            received_at: Utc::now(),
        };
        debug!(
            "upload {} ('{}', {} bytes) received at {}",
            file.id,
            file.file_name,
            file.payload.len(),
            file.received_at
        );
        Ok(file)
    }

    /// File size in megabytes, for display (two decimals, like the picker).
    pub fn size_mb(&self) -> String {
        format!("{:.2}", self.payload.len() as f64 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SupportedFormat::from_file_name("cv.pdf"),
            Some(SupportedFormat::Pdf)
        );
        assert_eq!(
            SupportedFormat::from_file_name("cv.DOCX"),
            Some(SupportedFormat::Docx)
        );
        assert_eq!(
            SupportedFormat::from_file_name("sheet.xlsx"),
            Some(SupportedFormat::Xlsx)
        );
        assert_eq!(
            SupportedFormat::from_file_name("old.xls"),
            Some(SupportedFormat::Xls)
        );
    }

    #[test]
    fn test_format_rejects_other_extensions() {
        assert_eq!(SupportedFormat::from_file_name("cv.txt"), None);
        assert_eq!(SupportedFormat::from_file_name("no-extension"), None);
        // extension match only; the content is never sniffed
        assert_eq!(SupportedFormat::from_file_name("actually-a-pdf"), None);
    }

    #[test]
    fn test_new_rejects_unsupported_extension() {
        let err = UploadedFile::new("cv.txt", Bytes::new()).unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedExtension {
                file_name: "cv.txt".to_string()
            }
        );
    }

    #[test]
    fn test_oversized_file_is_accepted() {
        let payload = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES + 1]);
        let file = UploadedFile::new("big.pdf", payload).unwrap();
        assert_eq!(file.format, SupportedFormat::Pdf);
    }

    #[test]
    fn test_size_mb_formatting() {
        let file = UploadedFile::new("cv.pdf", Bytes::from(vec![0u8; 1024 * 1024])).unwrap();
        assert_eq!(file.size_mb(), "1.00");
    }
}
