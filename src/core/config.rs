//! Decoder configuration: which wire format to read and how to read it.

use crate::core::diagnostics::{DiagnosticSink, NOOP};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default ceiling for a single record, matching a conventional line scanner
pub const DEFAULT_MAX_RECORD_LEN: usize = 64 * 1024;

/// Default number of bytes requested from the reader per refill
pub const DEFAULT_READ_CHUNK: usize = 4096;

/// Porcelain format generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    V1,
    V2,
}

/// How records are terminated on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framing {
    /// LF-terminated records; v2 rename paths are tab-separated
    Lines,
    /// NUL-terminated records (`-z`); rename paths are NUL-separated
    Nul,
}

impl Framing {
    pub fn terminator(self) -> u8 {
        match self {
            Framing::Lines => b'\n',
            Framing::Nul => b'\0',
        }
    }

    /// Separator between the two paths of a v2 rename/copy record
    pub fn rename_separator(self) -> u8 {
        match self {
            Framing::Lines => b'\t',
            Framing::Nul => b'\0',
        }
    }
}

/// One of the four supported inputs, as selected on the command line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `git status --porcelain=v1`
    #[value(name = "v1")]
    V1,
    /// `git status --porcelain=v1 -z`
    #[value(name = "v1z")]
    V1z,
    /// `git status --porcelain=v2`
    #[default]
    #[value(name = "v2")]
    V2,
    /// `git status --porcelain=v2 -z`
    #[value(name = "v2z")]
    V2z,
}

impl Format {
    pub fn generation(self) -> Generation {
        match self {
            Format::V1 | Format::V1z => Generation::V1,
            Format::V2 | Format::V2z => Generation::V2,
        }
    }

    pub fn framing(self) -> Framing {
        match self {
            Format::V1 | Format::V2 => Framing::Lines,
            Format::V1z | Format::V2z => Framing::Nul,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::V1 => "v1",
            Format::V1z => "v1z",
            Format::V2 => "v2",
            Format::V2z => "v2z",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call decoder settings
#[derive(Clone, Copy)]
pub struct ParseOptions<'a> {
    /// Receives non-fatal notices
    pub sink: &'a dyn DiagnosticSink,
    /// Longest record accepted before failing with `RecordTooLong`
    pub max_record_len: usize,
    /// Bytes requested per read
    pub read_chunk: usize,
}

impl<'a> ParseOptions<'a> {
    pub fn with_sink(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            sink,
            ..ParseOptions::default()
        }
    }

    pub fn max_record_len(mut self, max: usize) -> Self {
        self.max_record_len = max;
        self
    }

    pub fn read_chunk(mut self, chunk: usize) -> Self {
        self.read_chunk = chunk;
        self
    }
}

impl Default for ParseOptions<'_> {
    fn default() -> Self {
        Self {
            sink: &NOOP,
            max_record_len: DEFAULT_MAX_RECORD_LEN,
            read_chunk: DEFAULT_READ_CHUNK,
        }
    }
}

impl fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("max_record_len", &self.max_record_len)
            .field("read_chunk", &self.read_chunk)
            .finish_non_exhaustive()
    }
}
