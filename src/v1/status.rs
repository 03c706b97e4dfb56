//! Data model for `git status --porcelain=v1`.

use crate::core::fields::XYFlag;
use serde::Serialize;

/// A full porcelain v1 snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    /// `##` header lines, verbatim and in order
    pub headers: Vec<String>,
    pub entries: Vec<Entry>,
}

impl Status {
    /// Interprets the first `## ` header, as written by `git status --branch`.
    ///
    /// The header format is not part of the documented porcelain v1 contract,
    /// so this returns `None` for anything it does not recognize.
    pub fn branch(&self) -> Option<BranchHeader> {
        self.headers
            .iter()
            .find_map(|header| header.strip_prefix("## "))
            .and_then(BranchHeader::parse)
    }
}

/// `XY PATH`, or `XY ORIG -> PATH` for renames and copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub xy: XYFlag,
    pub path: String,
    /// Source path of a rename or copy. `Some("")` is an explicitly empty
    /// original path and is distinct from `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_path: Option<String>,
}

/// Branch line of `git status --porcelain=v1 --branch`
///
/// Recognized shapes:
/// - `main`
/// - `main...origin/main [ahead 1, behind 2]`
/// - `No commits yet on main`
/// - `HEAD (no branch)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchHeader {
    pub local: Option<String>,
    pub remote: Option<String>,
    pub ahead: u32,
    pub behind: u32,
    pub no_commits: bool,
    pub detached: bool,
}

impl BranchHeader {
    /// Parses the text after `## `.
    pub fn parse(line: &str) -> Option<Self> {
        if line == "HEAD (no branch)" {
            return Some(Self {
                detached: true,
                ..Self::default()
            });
        }

        let mut header = Self::default();
        let mut rest = line;
        for prefix in ["No commits yet on ", "Initial commit on "] {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                header.no_commits = true;
                rest = stripped;
            }
        }

        if let Some((names, tracking)) = rest.split_once(" [") {
            let tracking = tracking.strip_suffix(']')?;
            for part in tracking.split(", ") {
                match part.split_once(' ') {
                    Some(("ahead", n)) => header.ahead = n.parse().ok()?,
                    Some(("behind", n)) => header.behind = n.parse().ok()?,
                    _ if part == "gone" => {}
                    _ => return None,
                }
            }
            rest = names;
        }

        match rest.split_once("...") {
            Some((local, remote)) => {
                header.local = Some(local.to_string());
                header.remote = Some(remote.to_string());
            }
            None => header.local = Some(rest.to_string()),
        }
        if header.local.as_deref() == Some("") {
            return None;
        }
        Some(header)
    }
}
