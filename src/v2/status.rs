//! Data model for `git status --porcelain=v2`.

use crate::core::fields::{FileMode, SubmoduleStatus, XYFlag};
use serde::Serialize;
use std::fmt;

/// A full porcelain v2 snapshot
///
/// `branch` is `Some` only if at least one `# branch.*` header was decoded
/// (`--branch`), and `stash` only if a `# stash` header was decoded
/// (`--show-stash`). Entries keep the order in which their records arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub branch: Option<BranchInfo>,
    pub stash: Option<StashInfo>,
    pub entries: Vec<Entry>,
}

/// Data from the `# branch.*` headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchInfo {
    /// Commit hash or `(initial)`
    pub oid: String,
    /// Branch name or `(detached)`
    pub head: String,
    /// Upstream branch, empty if unset
    pub upstream: String,
    pub ahead: u32,
    pub behind: u32,
}

/// Data from the `# stash <N>` header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StashInfo {
    pub count: u32,
}

/// The kinds of per-file records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// `1` ordinary changed entry
    Changed,
    /// `2` rename or copy
    RenameOrCopy,
    /// `u` merge conflict
    Unmerged,
    /// `?` untracked file
    Untracked,
    /// `!` ignored file
    Ignored,
}

impl EntryKind {
    pub fn discriminant(self) -> u8 {
        match self {
            EntryKind::Changed => b'1',
            EntryKind::RenameOrCopy => b'2',
            EntryKind::Unmerged => b'u',
            EntryKind::Untracked => b'?',
            EntryKind::Ignored => b'!',
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.discriminant()))
    }
}

/// One per-file record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Changed(ChangedEntry),
    RenameOrCopy(RenameOrCopyEntry),
    Unmerged(UnmergedEntry),
    Untracked(UntrackedEntry),
    Ignored(IgnoredEntry),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Changed(_) => EntryKind::Changed,
            Entry::RenameOrCopy(_) => EntryKind::RenameOrCopy,
            Entry::Unmerged(_) => EntryKind::Unmerged,
            Entry::Untracked(_) => EntryKind::Untracked,
            Entry::Ignored(_) => EntryKind::Ignored,
        }
    }

    /// The current path of the entry (the new path for renames and copies)
    pub fn path(&self) -> &str {
        match self {
            Entry::Changed(e) => &e.path,
            Entry::RenameOrCopy(e) => &e.path,
            Entry::Unmerged(e) => &e.path,
            Entry::Untracked(e) => &e.path,
            Entry::Ignored(e) => &e.path,
        }
    }

    /// The XY status pair, for the kinds that carry one
    pub fn xy(&self) -> Option<XYFlag> {
        match self {
            Entry::Changed(e) => Some(e.xy),
            Entry::RenameOrCopy(e) => Some(e.xy),
            Entry::Unmerged(e) => Some(e.xy),
            Entry::Untracked(_) | Entry::Ignored(_) => None,
        }
    }
}

/// `1 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <path>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedEntry {
    pub xy: XYFlag,
    pub sub: SubmoduleStatus,
    /// Mode in HEAD
    pub mode_h: FileMode,
    /// Mode in the index
    pub mode_i: FileMode,
    /// Mode in the worktree
    pub mode_w: FileMode,
    /// Object name in HEAD
    pub hash_h: String,
    /// Object name in the index
    pub hash_i: String,
    pub path: String,
}

/// `2 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <X><score> <path><sep><origPath>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOrCopyEntry {
    pub xy: XYFlag,
    pub sub: SubmoduleStatus,
    pub mode_h: FileMode,
    pub mode_i: FileMode,
    pub mode_w: FileMode,
    pub hash_h: String,
    pub hash_i: String,
    /// Similarity, e.g. `R100` or `C75`
    pub score: String,
    /// Target path
    pub path: String,
    /// Source path; may be empty
    pub orig: String,
}

/// `u <XY> <sub> <m1> <m2> <m3> <mW> <h1> <h2> <h3> <path>`
///
/// Stage 1 is the common ancestor, stage 2 is ours, stage 3 is theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmergedEntry {
    pub xy: XYFlag,
    pub sub: SubmoduleStatus,
    pub mode_1: FileMode,
    pub mode_2: FileMode,
    pub mode_3: FileMode,
    pub mode_w: FileMode,
    pub hash_1: String,
    pub hash_2: String,
    pub hash_3: String,
    pub path: String,
}

/// `? <path>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UntrackedEntry {
    pub path: String,
}

/// `! <path>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredEntry {
    pub path: String,
}
