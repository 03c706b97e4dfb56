//! Record splitters for the two framings.
//!
//! A splitter is a pure function over the currently buffered bytes: it either
//! reports one complete record at the front of the buffer or asks for more
//! input. The [`RecordScanner`](crate::core::scanner::RecordScanner) owns the
//! read loop and calls the splitter again after every refill, so a
//! [`Split::NeedMore`] is a suspension point and never an error.
//!
//! # Splitters
//! - [`LineSplitter`]: LF-terminated records, used by both generations
//! - [`NulSplitter`]: NUL-terminated records with rename/copy disambiguation

use crate::core::config::Generation;
use crate::core::error::{PorcelainError, Result};

/// Outcome of one splitter call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// No complete record is buffered yet
    NeedMore,
    /// `data[..len]` is a record; the caller consumes `advance` bytes
    Token { advance: usize, len: usize },
}

pub trait Splitter {
    fn split(&self, data: &[u8], at_eof: bool) -> Result<Split>;
}

/// Splits on `\n`. Only the terminator is removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineSplitter;

impl Splitter for LineSplitter {
    fn split(&self, data: &[u8], at_eof: bool) -> Result<Split> {
        if let Some(end) = find_byte(data, b'\n') {
            return Ok(Split::Token {
                advance: end + 1,
                len: end,
            });
        }
        Ok(remainder_at_eof(data, at_eof))
    }
}

/// Splits NUL-terminated output where a rename/copy record carries a second,
/// internal NUL between its two paths.
///
/// The record kind is read from the bytes before the first NUL:
/// - v1: the record is a rename/copy when either XY byte is `R` or `C`
/// - v2: the record is a rename/copy when it starts with `"2 "`
///
/// For those records the first NUL is the path separator and stays inside the
/// returned token; the second NUL terminates the record.
#[derive(Debug, Clone, Copy)]
pub struct NulSplitter {
    generation: Generation,
}

impl NulSplitter {
    pub fn new(generation: Generation) -> Self {
        Self { generation }
    }

    pub fn v1() -> Self {
        Self::new(Generation::V1)
    }

    pub fn v2() -> Self {
        Self::new(Generation::V2)
    }

    fn is_rename_or_copy(&self, head: &[u8]) -> bool {
        match self.generation {
            Generation::V1 => head
                .get(..2)
                .is_some_and(|xy| xy.iter().any(|b| matches!(b, b'R' | b'C'))),
            Generation::V2 => head.starts_with(b"2 "),
        }
    }
}

impl Splitter for NulSplitter {
    fn split(&self, data: &[u8], at_eof: bool) -> Result<Split> {
        let Some(first) = find_byte(data, b'\0') else {
            return Ok(remainder_at_eof(data, at_eof));
        };

        if !self.is_rename_or_copy(&data[..first]) {
            return Ok(Split::Token {
                advance: first + 1,
                len: first,
            });
        }

        let rest = &data[first + 1..];
        match find_byte(rest, b'\0') {
            Some(second) => {
                let len = first + 1 + second;
                Ok(Split::Token {
                    advance: len + 1,
                    len,
                })
            }
            None if !at_eof => Ok(Split::NeedMore),
            // The original path runs to the end of input without a terminator.
            None if !rest.is_empty() => Ok(Split::Token {
                advance: data.len(),
                len: data.len(),
            }),
            None => Err(PorcelainError::TruncatedRenameOrCopy),
        }
    }
}

fn find_byte(data: &[u8], byte: u8) -> Option<usize> {
    data.iter().position(|&b| b == byte)
}

fn remainder_at_eof(data: &[u8], at_eof: bool) -> Split {
    if at_eof && !data.is_empty() {
        Split::Token {
            advance: data.len(),
            len: data.len(),
        }
    } else {
        Split::NeedMore
    }
}
