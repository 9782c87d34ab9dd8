//! Application-level error types.
//!
//! Nothing in this taxonomy is fatal. Bad indices come from stale UI events
//! and are absorbed at the reducer (document returned unchanged); an empty
//! skill submit is not an error at all, it is an ignored input.
#![allow(dead_code)]

use std::fmt;

use thiserror::Error;

/// Repeating section addressed by an index-based edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected document edit. The document is never left half-updated: the
/// failing operation returns this error and the caller keeps the old value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("index {index} is out of range for {section} (len {len})")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("unknown header field '{0}'")]
    UnknownHeaderField(String),
}

/// A rejected upload. Only the extension gate can reject; the 10 MB size
/// ceiling is advisory and logs a warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported file type for '{file_name}' (accepted: pdf, docx, xlsx, xls)")]
    UnsupportedExtension { file_name: String },
}

/// Failure reported by an enhancement backend. The scripted backend never
/// fails; the variant exists so real backends can report without panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    #[error("enhancement pipeline failed: {0}")]
    Pipeline(String),
}

/// Errors surfaced by session-level operations to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no file staged for upload")]
    NothingStaged,

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Enhance(#[from] EnhanceError),
}
