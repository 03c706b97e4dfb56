//! Fixed-format field types shared by both porcelain generations.
//!
//! # Public API
//! - [`State`]: one raw XY status byte with named constants
//! - [`XYFlag`]: the two-character index/worktree status pair
//! - [`SubmoduleStatus`]: the 4-character `<sub>` field of v2 records
//! - [`FileMode`]: an octal git file mode
//!
//! # Tolerant reader policy
//! Field decoders validate shape (length, digit range) and nothing more:
//! unknown XY letters are preserved verbatim, and unknown letters at the
//! submodule flag positions read as "flag not set".

use crate::core::error::FieldError;
use serde::{Serialize, Serializer};
use std::fmt;

/// One status-code byte from an XY field
///
/// The byte meaning "unmodified" depends on the format generation: a space in
/// porcelain v1 ([`State::UNMODIFIED_V1`]) and a dot in porcelain v2
/// ([`State::UNMODIFIED_V2`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(pub u8);

impl State {
    pub const UNMODIFIED_V1: State = State(b' ');
    pub const UNMODIFIED_V2: State = State(b'.');
    pub const MODIFIED: State = State(b'M');
    /// File type changed (regular file, symbolic link or submodule)
    pub const TYPE_CHANGED: State = State(b'T');
    pub const ADDED: State = State(b'A');
    pub const DELETED: State = State(b'D');
    pub const RENAMED: State = State(b'R');
    /// Copied (if `status.renames=copies`)
    pub const COPIED: State = State(b'C');
    /// Updated but unmerged (merge conflict)
    pub const UPDATED_UNMERGED: State = State(b'U');
    /// Untracked (v1 only; v2 has a dedicated record kind)
    pub const UNTRACKED: State = State(b'?');
    /// Ignored (v1 only; v2 has a dedicated record kind)
    pub const IGNORED: State = State(b'!');

    pub fn byte(self) -> u8 {
        self.0
    }

    pub fn is_rename_or_copy(self) -> bool {
        self == State::RENAMED || self == State::COPIED
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.0))
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(char::from(self.0))
    }
}

/// Index (X) and worktree (Y) status pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct XYFlag {
    pub x: State,
    pub y: State,
}

impl XYFlag {
    pub fn new(x: State, y: State) -> Self {
        Self { x, y }
    }

    pub fn parse(field: &[u8]) -> Result<Self, FieldError> {
        match field {
            [x, y] => Ok(Self::new(State(*x), State(*y))),
            _ => Err(FieldError::XyLength { len: field.len() }),
        }
    }

    /// True when either side reports a rename or copy
    pub fn is_rename_or_copy(self) -> bool {
        self.x.is_rename_or_copy() || self.y.is_rename_or_copy()
    }

    pub fn to_bytes(self) -> [u8; 2] {
        [self.x.byte(), self.y.byte()]
    }
}

impl fmt::Display for XYFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.x, self.y)
    }
}

/// The 4-character `<sub>` field: `N...` for a regular file, otherwise
/// `S<c><m><u>`. Flags other than `is_submodule` are only meaningful when
/// `is_submodule` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SubmoduleStatus {
    pub is_submodule: bool,
    pub commit_changed: bool,
    pub has_modifications: bool,
    pub has_untracked: bool,
}

impl SubmoduleStatus {
    pub fn parse(field: &[u8]) -> Result<Self, FieldError> {
        match field {
            [s, c, m, u] => Ok(Self {
                is_submodule: *s == b'S',
                commit_changed: *c == b'C',
                has_modifications: *m == b'M',
                has_untracked: *u == b'U',
            }),
            _ => Err(FieldError::submodule_length(field)),
        }
    }
}

impl fmt::Display for SubmoduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_submodule {
            return f.write_str("N...");
        }
        let flag = |set: bool, c: char| if set { c } else { '.' };
        write!(
            f,
            "S{}{}{}",
            flag(self.commit_changed, 'C'),
            flag(self.has_modifications, 'M'),
            flag(self.has_untracked, 'U')
        )
    }
}

/// Git tree entry mode, decoded from octal text
///
/// The named constants cover the modes git writes today, but any octal value
/// is preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FileMode(pub u32);

impl FileMode {
    pub const EMPTY: FileMode = FileMode(0);
    pub const DIR: FileMode = FileMode(0o040000);
    pub const REGULAR: FileMode = FileMode(0o100644);
    pub const EXECUTABLE: FileMode = FileMode(0o100755);
    pub const SYMLINK: FileMode = FileMode(0o120000);
    pub const SUBMODULE: FileMode = FileMode(0o160000);

    const MAX_DIGITS: usize = 6;

    /// Parses 1 to 6 octal digits. Signs, whitespace and any other byte are rejected.
    pub fn parse(field: &[u8]) -> Result<Self, FieldError> {
        if field.is_empty() || field.len() > Self::MAX_DIGITS {
            return Err(FieldError::file_mode(field));
        }
        field
            .iter()
            .try_fold(0u32, |mode, &b| match b {
                b'0'..=b'7' => Ok(mode * 8 + u32::from(b - b'0')),
                _ => Err(FieldError::file_mode(field)),
            })
            .map(FileMode)
    }

    pub fn is_known(self) -> bool {
        matches!(
            self,
            FileMode::EMPTY
                | FileMode::DIR
                | FileMode::REGULAR
                | FileMode::EXECUTABLE
                | FileMode::SYMLINK
                | FileMode::SUBMODULE
        )
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06o}", self.0)
    }
}

impl Serialize for FileMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Splits `record` on single spaces into exactly `N` fields, the last of
/// which keeps every remaining byte (including further spaces).
pub(crate) fn split_fields<const N: usize>(record: &[u8]) -> Result<[&[u8]; N], FieldError> {
    let empty: &[u8] = &[];
    let mut fields = [empty; N];
    let mut found = 0;
    for (slot, field) in fields.iter_mut().zip(record.splitn(N, |&b| b == b' ')) {
        *slot = field;
        found += 1;
    }
    if found < N {
        return Err(FieldError::field_count(N, found));
    }
    Ok(fields)
}

/// Converts a path or hash field to an owned string.
pub(crate) fn text(field: &[u8], name: &'static str) -> Result<String, FieldError> {
    std::str::from_utf8(field)
        .map(str::to_owned)
        .map_err(|_| FieldError::Utf8 { field: name })
}
