//! Output predicates for `porcelain2json`

#![allow(dead_code)]

use predicates::prelude::*;

/// Matches the styled error printer
pub fn decode_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}

/// Matches an entry kind tag in pretty or compact JSON
pub fn has_entry_kind(kind: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("\"kind\": \"{kind}\""))
        .or(predicates::str::contains(format!("\"kind\":\"{kind}\"")))
}

/// Matches a `"path"` value in pretty or compact JSON
pub fn has_path(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("\"path\": \"{path}\""))
        .or(predicates::str::contains(format!("\"path\":\"{path}\"")))
}

/// Matches output that parses as one JSON document
pub fn is_json() -> impl Predicate<str> {
    predicate::function(|out: &str| serde_json::from_str::<serde_json::Value>(out).is_ok())
}
