//! Shared test utilities for the porcelain integration tests
//!
//! Static porcelain samples, temporary git repositories driven through the
//! `git` binary, and output predicates for CLI tests.

pub mod assertions;
pub mod fixtures;
pub mod repository;
