//! Porcelain samples and repository scenarios
//!
//! The v2 sample carries one record of every kind plus a non-standard comment
//! and a repeated upstream header, neither of which may break decoding.

#![allow(dead_code)]

use super::repository::*;
use porcelain::core::error::Result;

pub const HASH_A: &str = "1234567890abcdef1234567890abcdef12345678";
pub const HASH_B: &str = "abcdef1234567890abcdef1234567890abcdef12";
pub const HASH_C: &str = "fedcba0987654321fedcba0987654321fedcba09";

pub const V2_HEADER_COMMENT: &str = "# comment non-standard header to be ignored";
pub const V2_HEADER_OID: &str = "# branch.oid 34064be349d4a03ed158aba170d8d2db6ff9e3e0";
pub const V2_HEADER_HEAD: &str = "# branch.head main";
pub const V2_HEADER_UPSTREAM: &str = "# branch.upstream origin/main";
pub const V2_HEADER_AB: &str = "# branch.ab +6 -3";
pub const V2_HEADER_STASH: &str = "# stash 3";

pub const V2_CHANGED: &str = "1 M. N... 100644 100644 100644 1234567890abcdef1234567890abcdef12345678 1234567890abcdef1234567890abcdef12345678 file_changed.txt";
pub const V2_UNMERGED: &str = "u UU N... 100644 100644 100644 100644 1234567890abcdef1234567890abcdef12345678 abcdef1234567890abcdef1234567890abcdef12 fedcba0987654321fedcba0987654321fedcba09 file_unmerged.txt";
pub const V2_UNTRACKED: &str = "? file_untracked.txt";
pub const V2_IGNORED: &str = "! file_ignored.txt";

/// The rename record with the given path separator
pub fn v2_renamed(sep: char) -> String {
    format!("2 R. N... 100644 100644 100644 {HASH_A} {HASH_A} R100 file_renamed.txt{sep}file_original.txt")
}

/// Every v2 record kind, joined with `terminator`. The rename separator is
/// chosen to match: tab for `\n`, NUL for `\0`.
pub fn v2_sample(terminator: char) -> Vec<u8> {
    let sep = if terminator == '\0' { '\0' } else { '\t' };
    let renamed = v2_renamed(sep);
    [
        V2_HEADER_COMMENT,
        V2_HEADER_OID,
        V2_HEADER_HEAD,
        V2_HEADER_UPSTREAM,
        V2_HEADER_AB,
        V2_HEADER_STASH,
        V2_HEADER_UPSTREAM,
        V2_CHANGED,
        renamed.as_str(),
        V2_UNMERGED,
        V2_UNTRACKED,
        V2_IGNORED,
    ]
    .join(&terminator.to_string())
    .into_bytes()
}

pub const V1_SAMPLE: &str = "## main...origin/main [ahead 1, behind 2]\n M file1.txt\nA  file2.txt\nD  file3.txt\nR  old_name.txt -> new_name.txt\nC  orig.txt -> copy.txt\nUU conflict.txt\n?? untracked.txt\n!! ignored.txt\n";

pub const V1Z_SAMPLE: &[u8] = b"## main...origin/main [ahead 1, behind 2]\0 M file1.txt\0A  file2.txt\0D  file3.txt\0R  new_name.txt\0old_name.txt\0C  copy.txt\0orig.txt\0UU conflict.txt\0?? untracked.txt\0!! ignored.txt\0";

/// Scenario: one committed file modified, one staged addition, one staged
/// rename, one deletion and one untracked file
pub fn create_mixed_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "modified.txt", "content1\nline 2\n")?;
    create_file(&repo.path, "rename_me.txt", "content2\nline 2\nline 3\n")?;
    create_file(&repo.path, "deleted.txt", "content3\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "modified.txt", "modified1\nline 2\nnew line\n")?;
    create_file(&repo.path, "added.txt", "new\n")?;
    git_add(&repo.path, "added.txt")?;
    git_mv(&repo.path, "rename_me.txt", "renamed.txt")?;
    remove_file(&repo.path, "deleted.txt")?;
    create_file(&repo.path, "untracked.txt", "scratch\n")?;

    Ok(repo)
}
