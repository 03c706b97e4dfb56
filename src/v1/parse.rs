use crate::core::config::{Framing, ParseOptions};
use crate::core::error::{FieldError, PorcelainError, RecordKind, Result};
use crate::core::fields::{text, XYFlag};
use crate::core::scanner::RecordScanner;
use crate::core::split::{LineSplitter, NulSplitter, Splitter};
use crate::v1::status::{Entry, Status};
use std::io::Read;

const RENAME_ARROW: &[u8] = b" -> ";

/// Parses the output of `git status --porcelain=v1`.
///
/// `##` header lines (from `--branch`) are kept verbatim in
/// [`Status::headers`]. Paths are not unquoted.
pub fn parse<R: Read>(reader: R) -> Result<Status> {
    parse_with(reader, Framing::Lines, &ParseOptions::default())
}

/// Parses the output of `git status --porcelain=v1 -z`.
///
/// Renames and copies are written by git as `XY PATH\0ORIG`.
pub fn parse_z<R: Read>(reader: R) -> Result<Status> {
    parse_with(reader, Framing::Nul, &ParseOptions::default())
}

pub fn parse_with<R: Read>(reader: R, framing: Framing, options: &ParseOptions<'_>) -> Result<Status> {
    match framing {
        Framing::Lines => decode(
            RecordScanner::with_options(reader, LineSplitter, options),
            parse_entry,
        ),
        Framing::Nul => decode(
            RecordScanner::with_options(reader, NulSplitter::v1(), options),
            parse_entry_z,
        ),
    }
}

fn decode<R: Read, S: Splitter>(
    mut scanner: RecordScanner<R, S>,
    parse_entry: fn(&[u8]) -> Result<Entry>,
) -> Result<Status> {
    let mut status = Status::default();
    while let Some(record) = scanner.next_record()? {
        if record.starts_with(b"##") {
            let header = text(record, "header")
                .map_err(|source| PorcelainError::record(RecordKind::LegacyHeader, record, source))?;
            status.headers.push(header);
            continue;
        }
        status.entries.push(parse_entry(record)?);
    }
    Ok(status)
}

/// Decodes `XY ` and returns the status pair with the remaining path bytes.
fn split_xy(record: &[u8]) -> std::result::Result<(XYFlag, &[u8]), FieldError> {
    if record.len() < 3 {
        return Err(FieldError::TooShort { len: record.len() });
    }
    let xy = XYFlag::parse(&record[..2])?;
    if record[2] != b' ' {
        return Err(FieldError::MissingSpace {
            found: char::from(record[2]),
        });
    }
    Ok((xy, &record[3..]))
}

/// Line entry: `XY PATH` or `XY ORIG -> PATH`.
///
/// Any path containing `" -> "` is read as a rename; both sides must be
/// non-empty.
pub fn parse_entry(record: &[u8]) -> Result<Entry> {
    let fail = |source| PorcelainError::record(RecordKind::Legacy, record, source);
    let (xy, paths) = split_xy(record).map_err(fail)?;

    let arrow = paths
        .windows(RENAME_ARROW.len())
        .position(|window| window == RENAME_ARROW);
    let Some(at) = arrow else {
        return Ok(Entry {
            xy,
            path: text(paths, "path").map_err(fail)?,
            orig_path: None,
        });
    };

    let (orig, path) = (&paths[..at], &paths[at + RENAME_ARROW.len()..]);
    if orig.is_empty() || path.is_empty() {
        return Err(fail(FieldError::empty_rename_path(paths)));
    }
    Ok(Entry {
        xy,
        path: text(path, "path").map_err(fail)?,
        orig_path: Some(text(orig, "original path").map_err(fail)?),
    })
}

/// NUL entry: `XY PATH` or, when X or Y is `R`/`C`, `XY PATH\0ORIG`.
///
/// A rename/copy entry without the embedded NUL is read as a plain path.
pub fn parse_entry_z(record: &[u8]) -> Result<Entry> {
    let fail = |source| PorcelainError::record(RecordKind::Legacy, record, source);
    let (xy, paths) = split_xy(record).map_err(fail)?;

    let separator = if xy.is_rename_or_copy() {
        paths.iter().position(|&b| b == b'\0')
    } else {
        None
    };
    let Some(at) = separator else {
        return Ok(Entry {
            xy,
            path: text(paths, "path").map_err(fail)?,
            orig_path: None,
        });
    };

    Ok(Entry {
        xy,
        path: text(&paths[..at], "path").map_err(fail)?,
        orig_path: Some(text(&paths[at + 1..], "original path").map_err(fail)?),
    })
}
