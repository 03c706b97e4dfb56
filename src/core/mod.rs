//! Format-independent building blocks shared by the v1 and v2 decoders.
//!
//! This module provides record tokenizing, fixed-format field types, error
//! handling, decoder configuration and console output.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod output;
pub mod scanner;
pub mod split;

// === Error handling ===
pub use error::{FieldError, PorcelainError, RecordKind, Result};

// === Configuration ===
// Format selection, framing and per-call decoder settings
pub use config::{Format, Framing, Generation, ParseOptions};

// === Diagnostics ===
// Receivers for dropped headers and skipped records
pub use diagnostics::{DiagnosticSink, LogSink, NoopSink, Notice};

// === Field types ===
pub use fields::{FileMode, State, SubmoduleStatus, XYFlag};

// === Tokenizing ===
// Incremental scanner and the two record splitters it drives
pub use scanner::RecordScanner;
pub use split::{LineSplitter, NulSplitter, Split, Splitter};

// === Output formatting ===
pub use output::print_error;
