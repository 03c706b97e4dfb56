//! Record dispatch and field decoding for porcelain v2.

use crate::core::config::{Framing, ParseOptions};
use crate::core::diagnostics::{DiagnosticSink, Notice};
use crate::core::error::{FieldError, PorcelainError, RecordKind, Result};
use crate::core::fields::{split_fields, text, FileMode, SubmoduleStatus, XYFlag};
use crate::core::scanner::RecordScanner;
use crate::core::split::{LineSplitter, NulSplitter, Splitter};
use crate::v2::status::{
    BranchInfo, ChangedEntry, Entry, IgnoredEntry, RenameOrCopyEntry, StashInfo, Status,
    UnmergedEntry, UntrackedEntry,
};
use std::io::Read;

/// Parses the output of `git status --porcelain=v2`.
///
/// `--branch` and `--show-stash` headers are decoded if present. Paths are kept
/// exactly as git printed them, including any quoting applied under
/// `core.quotePath`; use [`parse_z`] for unquoted paths.
pub fn parse<R: Read>(reader: R) -> Result<Status> {
    parse_with(reader, Framing::Lines, &ParseOptions::default())
}

/// Parses the output of `git status --porcelain=v2 -z`.
///
/// Records are NUL-terminated and the two paths of a rename/copy record are
/// separated by NUL instead of tab.
pub fn parse_z<R: Read>(reader: R) -> Result<Status> {
    parse_with(reader, Framing::Nul, &ParseOptions::default())
}

/// Parses porcelain v2 output with explicit framing and options.
pub fn parse_with<R: Read>(reader: R, framing: Framing, options: &ParseOptions<'_>) -> Result<Status> {
    match framing {
        Framing::Lines => decode(
            RecordScanner::with_options(reader, LineSplitter, options),
            framing,
            options.sink,
        ),
        Framing::Nul => decode(
            RecordScanner::with_options(reader, NulSplitter::v2(), options),
            framing,
            options.sink,
        ),
    }
}

fn decode<R: Read, S: Splitter>(
    mut scanner: RecordScanner<R, S>,
    framing: Framing,
    sink: &dyn DiagnosticSink,
) -> Result<Status> {
    let mut status = Status::default();
    while let Some(record) = scanner.next_record()? {
        if let Some(entry) = parse_record(record, framing.rename_separator(), &mut status, sink)? {
            status.entries.push(entry);
        }
    }
    Ok(status)
}

/// Routes one record by its first byte.
///
/// Headers update `status` in place and yield `None`; so do records with an
/// unknown discriminant, which are skipped so that newer git versions can add
/// record kinds without breaking older readers.
pub(crate) fn parse_record(
    record: &[u8],
    rename_sep: u8,
    status: &mut Status,
    sink: &dyn DiagnosticSink,
) -> Result<Option<Entry>> {
    let Some(&discriminant) = record.first() else {
        return Ok(None);
    };
    let entry = match discriminant {
        b'#' => {
            parse_header(record, status, sink);
            return Ok(None);
        }
        b'1' => Entry::Changed(parse_changed(record)?),
        b'2' => Entry::RenameOrCopy(parse_rename_or_copy(record, rename_sep)?),
        b'u' => Entry::Unmerged(parse_unmerged(record)?),
        b'?' => Entry::Untracked(parse_untracked(record)?),
        b'!' => Entry::Ignored(parse_ignored(record)?),
        other => {
            sink.notice(&Notice::UnknownRecord {
                discriminant: other,
            });
            return Ok(None);
        }
    };
    Ok(Some(entry))
}

/// Applies one `# <key> <value>` header.
///
/// Unknown keys and unparsable values are reported to `sink` and otherwise
/// ignored; a dropped header never creates `branch` or `stash`.
pub(crate) fn parse_header(record: &[u8], status: &mut Status, sink: &dyn DiagnosticSink) {
    let Some(line) = record
        .strip_prefix(b"# ")
        .and_then(|rest| std::str::from_utf8(rest).ok())
    else {
        sink.notice(&Notice::UnreadableHeader { line: record });
        return;
    };
    let Some((key, value)) = line.split_once(' ') else {
        sink.notice(&Notice::UnreadableHeader { line: record });
        return;
    };

    match key {
        "branch.oid" => ensure_branch(status).oid = value.to_string(),
        "branch.head" => ensure_branch(status).head = value.to_string(),
        "branch.upstream" => ensure_branch(status).upstream = value.to_string(),
        "branch.ab" => match parse_ahead_behind(value) {
            Some((ahead, behind)) => {
                let branch = ensure_branch(status);
                branch.ahead = ahead;
                branch.behind = behind;
            }
            None => sink.notice(&Notice::MalformedHeader { key, value }),
        },
        "stash" => match value.parse::<u32>() {
            Ok(count) => status.stash = Some(StashInfo { count }),
            Err(_) => sink.notice(&Notice::MalformedHeader { key, value }),
        },
        _ => sink.notice(&Notice::UnknownHeader { line }),
    }
}

fn ensure_branch(status: &mut Status) -> &mut BranchInfo {
    status.branch.get_or_insert_with(BranchInfo::default)
}

/// `+<ahead> -<behind>`
fn parse_ahead_behind(value: &str) -> Option<(u32, u32)> {
    let (ahead, behind) = value.split_once(' ')?;
    let ahead = ahead.strip_prefix('+')?;
    let behind = behind.strip_prefix('-')?;
    if !is_digits(ahead) || !is_digits(behind) {
        return None;
    }
    Some((ahead.parse().ok()?, behind.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn expect_prefix(kind: RecordKind, record: &[u8], field: &[u8], want: &[u8]) -> Result<()> {
    if field != want {
        return Err(PorcelainError::record(kind, record, FieldError::prefix(field)));
    }
    Ok(())
}

/// Ordinary changed entry: `1 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <path>`
pub fn parse_changed(record: &[u8]) -> Result<ChangedEntry> {
    const KIND: RecordKind = RecordKind::Changed;
    let fail = |source| PorcelainError::record(KIND, record, source);

    let [kind, xy, sub, mode_h, mode_i, mode_w, hash_h, hash_i, path] =
        split_fields::<9>(record).map_err(fail)?;
    expect_prefix(KIND, record, kind, b"1")?;

    Ok(ChangedEntry {
        xy: XYFlag::parse(xy).map_err(fail)?,
        sub: SubmoduleStatus::parse(sub).map_err(fail)?,
        mode_h: FileMode::parse(mode_h).map_err(fail)?,
        mode_i: FileMode::parse(mode_i).map_err(fail)?,
        mode_w: FileMode::parse(mode_w).map_err(fail)?,
        hash_h: text(hash_h, "hash").map_err(fail)?,
        hash_i: text(hash_i, "hash").map_err(fail)?,
        path: text(path, "path").map_err(fail)?,
    })
}

/// Renamed or copied entry:
/// `2 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <X><score> <path><sep><origPath>`
///
/// `sep` is tab for line output and NUL for `-z` output. The separator must be
/// present; an empty original path after it is kept as `""`.
pub fn parse_rename_or_copy(record: &[u8], sep: u8) -> Result<RenameOrCopyEntry> {
    const KIND: RecordKind = RecordKind::RenameOrCopy;
    let fail = |source| PorcelainError::record(KIND, record, source);

    let [kind, xy, sub, mode_h, mode_i, mode_w, hash_h, hash_i, score, paths] =
        split_fields::<10>(record).map_err(fail)?;
    expect_prefix(KIND, record, kind, b"2")?;

    let split_at = paths
        .iter()
        .position(|&b| b == sep)
        .ok_or_else(|| fail(FieldError::missing_path_separator(paths)))?;
    let (path, orig) = (&paths[..split_at], &paths[split_at + 1..]);

    Ok(RenameOrCopyEntry {
        xy: XYFlag::parse(xy).map_err(fail)?,
        sub: SubmoduleStatus::parse(sub).map_err(fail)?,
        mode_h: FileMode::parse(mode_h).map_err(fail)?,
        mode_i: FileMode::parse(mode_i).map_err(fail)?,
        mode_w: FileMode::parse(mode_w).map_err(fail)?,
        hash_h: text(hash_h, "hash").map_err(fail)?,
        hash_i: text(hash_i, "hash").map_err(fail)?,
        score: text(score, "score").map_err(fail)?,
        path: text(path, "path").map_err(fail)?,
        orig: text(orig, "original path").map_err(fail)?,
    })
}

/// Unmerged entry: `u <XY> <sub> <m1> <m2> <m3> <mW> <h1> <h2> <h3> <path>`
pub fn parse_unmerged(record: &[u8]) -> Result<UnmergedEntry> {
    const KIND: RecordKind = RecordKind::Unmerged;
    let fail = |source| PorcelainError::record(KIND, record, source);

    let [kind, xy, sub, mode_1, mode_2, mode_3, mode_w, hash_1, hash_2, hash_3, path] =
        split_fields::<11>(record).map_err(fail)?;
    expect_prefix(KIND, record, kind, b"u")?;

    Ok(UnmergedEntry {
        xy: XYFlag::parse(xy).map_err(fail)?,
        sub: SubmoduleStatus::parse(sub).map_err(fail)?,
        mode_1: FileMode::parse(mode_1).map_err(fail)?,
        mode_2: FileMode::parse(mode_2).map_err(fail)?,
        mode_3: FileMode::parse(mode_3).map_err(fail)?,
        mode_w: FileMode::parse(mode_w).map_err(fail)?,
        hash_1: text(hash_1, "hash").map_err(fail)?,
        hash_2: text(hash_2, "hash").map_err(fail)?,
        hash_3: text(hash_3, "hash").map_err(fail)?,
        path: text(path, "path").map_err(fail)?,
    })
}

/// Untracked entry: `? <path>`
pub fn parse_untracked(record: &[u8]) -> Result<UntrackedEntry> {
    let path = single_path(RecordKind::Untracked, record, b"? ")?;
    Ok(UntrackedEntry { path })
}

/// Ignored entry: `! <path>`
pub fn parse_ignored(record: &[u8]) -> Result<IgnoredEntry> {
    let path = single_path(RecordKind::Ignored, record, b"! ")?;
    Ok(IgnoredEntry { path })
}

fn single_path(kind: RecordKind, record: &[u8], prefix: &[u8]) -> Result<String> {
    let path = record.strip_prefix(prefix).ok_or_else(|| {
        let found = &record[..record.len().min(prefix.len())];
        PorcelainError::record(kind, record, FieldError::prefix(found))
    })?;
    text(path, "path").map_err(|source| PorcelainError::record(kind, record, source))
}
