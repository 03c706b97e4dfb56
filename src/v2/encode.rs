//! Writes a [`Status`] back into porcelain v2 wire form.

use crate::core::config::Framing;
use crate::v2::status::{BranchInfo, Entry, Status};

impl Status {
    /// Serializes headers and entries with the given framing.
    ///
    /// When `branch` is set all four `# branch.*` headers are written, so
    /// decoding the result yields an equal value.
    pub fn encode(&self, framing: Framing) -> Vec<u8> {
        let mut out = Vec::new();
        let mut push = |record: String| {
            out.extend_from_slice(record.as_bytes());
            out.push(framing.terminator());
        };

        if let Some(branch) = &self.branch {
            branch_headers(branch).into_iter().for_each(&mut push);
        }
        if let Some(stash) = &self.stash {
            push(format!("# stash {}", stash.count));
        }
        for entry in &self.entries {
            push(entry.to_record(framing));
        }
        out
    }
}

fn branch_headers(branch: &BranchInfo) -> [String; 4] {
    [
        format!("# branch.oid {}", branch.oid),
        format!("# branch.head {}", branch.head),
        format!("# branch.upstream {}", branch.upstream),
        format!("# branch.ab +{} -{}", branch.ahead, branch.behind),
    ]
}

impl Entry {
    /// One record without its terminator
    pub fn to_record(&self, framing: Framing) -> String {
        match self {
            Entry::Changed(e) => format!(
                "1 {} {} {} {} {} {} {} {}",
                e.xy, e.sub, e.mode_h, e.mode_i, e.mode_w, e.hash_h, e.hash_i, e.path
            ),
            Entry::RenameOrCopy(e) => format!(
                "2 {} {} {} {} {} {} {} {} {}{}{}",
                e.xy,
                e.sub,
                e.mode_h,
                e.mode_i,
                e.mode_w,
                e.hash_h,
                e.hash_i,
                e.score,
                e.path,
                char::from(framing.rename_separator()),
                e.orig
            ),
            Entry::Unmerged(e) => format!(
                "u {} {} {} {} {} {} {} {} {} {}",
                e.xy,
                e.sub,
                e.mode_1,
                e.mode_2,
                e.mode_3,
                e.mode_w,
                e.hash_1,
                e.hash_2,
                e.hash_3,
                e.path
            ),
            Entry::Untracked(e) => format!("? {}", e.path),
            Entry::Ignored(e) => format!("! {}", e.path),
        }
    }
}
