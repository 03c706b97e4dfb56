//! Porcelain v2 (`git status --porcelain=v2`).
//!
//! Every record starts with a one-byte discriminant followed by a space:
//!
//! | byte | record                                     |
//! |------|--------------------------------------------|
//! | `#`  | header (`--branch`, `--show-stash`)        |
//! | `1`  | ordinary changed entry                     |
//! | `2`  | renamed or copied entry                    |
//! | `u`  | unmerged entry                             |
//! | `?`  | untracked path                             |
//! | `!`  | ignored path (`--ignored`)                 |
//!
//! Records with any other discriminant are skipped.

mod encode;
mod parse;
mod status;

pub use parse::{
    parse, parse_changed, parse_ignored, parse_rename_or_copy, parse_unmerged, parse_untracked,
    parse_with, parse_z,
};
pub use status::{
    BranchInfo, ChangedEntry, Entry, EntryKind, IgnoredEntry, RenameOrCopyEntry, StashInfo, Status,
    UnmergedEntry, UntrackedEntry,
};
