//! Porcelain v1 (`git status --porcelain=v1`), the legacy short format.
//!
//! Each entry is `XY PATH`, with renames and copies written as
//! `XY ORIG -> PATH` in line mode and `XY PATH\0ORIG` in `-z` mode. The
//! unmodified marker is a space, unlike the `.` of porcelain v2.

mod encode;
mod parse;
mod status;

pub use parse::{parse, parse_entry, parse_entry_z, parse_with, parse_z};
pub use status::{BranchHeader, Entry, Status};
