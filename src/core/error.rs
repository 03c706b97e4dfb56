//! Domain-specific error types for porcelain decoding.
//!
//! This module defines [`PorcelainError`], returned by every decode entry point,
//! and [`FieldError`], which describes why a single sub-field of a record was
//! rejected. Record-level failures wrap a [`FieldError`] together with the raw
//! record that caused it.
//!
//! # Public API
//! - [`PorcelainError`]: Terminal decode errors
//! - [`FieldError`]: Sub-field validation failures
//! - [`RecordKind`]: Which record decoder rejected the input
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PorcelainError>`
//!
//! # Error Categories
//! - **Structural**: wrong field count, malformed fixed-width field, missing separator
//! - **Tokenizer**: truncated rename/copy record, record too long
//! - **I/O**: failures of the underlying reader

use std::fmt;
use thiserror::Error;

/// The record decoders that can reject input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Changed,
    RenameOrCopy,
    Unmerged,
    Untracked,
    Ignored,
    /// A porcelain v1 file entry
    Legacy,
    /// A porcelain v1 `##` header line
    LegacyHeader,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Changed => "changed",
            RecordKind::RenameOrCopy => "rename or copy",
            RecordKind::Unmerged => "unmerged",
            RecordKind::Untracked => "untracked",
            RecordKind::Ignored => "ignored",
            RecordKind::Legacy => "v1",
            RecordKind::LegacyHeader => "v1 header",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field of a record was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected at least {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("unexpected record prefix {found:?}")]
    Prefix { found: String },

    #[error("invalid XY field: expected 2 characters, got {len}")]
    XyLength { len: usize },

    #[error("invalid submodule status field {field:?}: expected 4 characters")]
    SubmoduleLength { field: String },

    #[error("invalid file mode {field:?}: expected 1-6 octal digits")]
    FileMode { field: String },

    #[error("missing rename/copy path separator in {field:?}")]
    MissingPathSeparator { field: String },

    #[error("invalid rename format {field:?}: empty path around \" -> \"")]
    EmptyRenamePath { field: String },

    #[error("expected space after XY status, got {found:?}")]
    MissingSpace { found: char },

    #[error("record too short: {len} bytes")]
    TooShort { len: usize },

    #[error("invalid UTF-8 in {field} field")]
    Utf8 { field: &'static str },
}

/// Terminal errors returned by the decoders
#[derive(Error, Debug)]
pub enum PorcelainError {
    #[error("invalid {kind} record {record:?}: {source}")]
    Record {
        kind: RecordKind,
        record: String,
        #[source]
        source: FieldError,
    },

    #[error("malformed rename/copy record: missing original path")]
    TruncatedRenameOrCopy,

    #[error("record exceeds maximum length of {max} bytes")]
    RecordTooLong { max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PorcelainError
pub type Result<T> = std::result::Result<T, PorcelainError>;

impl PorcelainError {
    /// Create a record error, keeping a lossy text copy of the raw record
    pub fn record(kind: RecordKind, record: &[u8], source: FieldError) -> Self {
        Self::Record {
            kind,
            record: String::from_utf8_lossy(record).into_owned(),
            source,
        }
    }

    /// Create a record too long error
    pub fn record_too_long(max: usize) -> Self {
        Self::RecordTooLong { max }
    }

    /// The field-level cause of a record error, if any
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl FieldError {
    pub fn field_count(expected: usize, found: usize) -> Self {
        Self::FieldCount { expected, found }
    }

    pub fn prefix(found: &[u8]) -> Self {
        Self::Prefix {
            found: String::from_utf8_lossy(found).into_owned(),
        }
    }

    pub fn submodule_length(field: &[u8]) -> Self {
        Self::SubmoduleLength {
            field: String::from_utf8_lossy(field).into_owned(),
        }
    }

    pub fn file_mode(field: &[u8]) -> Self {
        Self::FileMode {
            field: String::from_utf8_lossy(field).into_owned(),
        }
    }

    pub fn missing_path_separator(field: &[u8]) -> Self {
        Self::MissingPathSeparator {
            field: String::from_utf8_lossy(field).into_owned(),
        }
    }

    pub fn empty_rename_path(field: &[u8]) -> Self {
        Self::EmptyRenamePath {
            field: String::from_utf8_lossy(field).into_owned(),
        }
    }
}
