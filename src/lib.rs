//! porcelain - typed decoding of `git status` porcelain output.
//!
//! This library turns the machine-readable output of `git status` into
//! strongly-typed values. Both format generations are supported, each in its
//! line-terminated and NUL-terminated (`-z`) variant.
//!
//! # Public API
//! - [`v2::parse`], [`v2::parse_z`]: `--porcelain=v2` output
//! - [`v1::parse`], [`v1::parse_z`]: `--porcelain=v1` output
//! - [`decode`]: format chosen at runtime
//! - [`core`]: shared field types, errors, configuration and the record scanner
//!
//! The decoders never invoke git and never touch the filesystem; they read
//! from any [`std::io::Read`].
//!
//! ```
//! let status = porcelain::v2::parse(&b"? notes.txt\n"[..]).unwrap();
//! assert_eq!(status.entries[0].path(), "notes.txt");
//! ```

pub mod commands;
pub mod core;
mod decode;
pub mod v1;
pub mod v2;

// Re-export the core public API for external users
pub use crate::core::{
    DiagnosticSink,
    FieldError,
    FileMode,
    Format,
    Framing,
    LogSink,
    NoopSink,
    // Error handling
    PorcelainError,
    ParseOptions,
    Result,

    State,
    SubmoduleStatus,
    XYFlag,
};
pub use decode::{decode, AnyStatus};
