use porcelain::core::{FileMode, PorcelainError, State, SubmoduleStatus, XYFlag};
use porcelain::v2::{
    self, BranchInfo, ChangedEntry, Entry, EntryKind, IgnoredEntry, RenameOrCopyEntry, StashInfo,
    Status, UnmergedEntry, UntrackedEntry,
};
use porcelain::{Framing, ParseOptions};
use pretty_assertions::assert_eq;

mod common;
use common::fixtures::*;

fn expected_sample() -> Status {
    let xy = |x: State, y: State| XYFlag::new(x, y);
    Status {
        branch: Some(BranchInfo {
            oid: "34064be349d4a03ed158aba170d8d2db6ff9e3e0".to_string(),
            head: "main".to_string(),
            upstream: "origin/main".to_string(),
            ahead: 6,
            behind: 3,
        }),
        stash: Some(StashInfo { count: 3 }),
        entries: vec![
            Entry::Changed(ChangedEntry {
                xy: xy(State::MODIFIED, State::UNMODIFIED_V2),
                sub: SubmoduleStatus::default(),
                mode_h: FileMode::REGULAR,
                mode_i: FileMode::REGULAR,
                mode_w: FileMode::REGULAR,
                hash_h: HASH_A.to_string(),
                hash_i: HASH_A.to_string(),
                path: "file_changed.txt".to_string(),
            }),
            Entry::RenameOrCopy(RenameOrCopyEntry {
                xy: xy(State::RENAMED, State::UNMODIFIED_V2),
                sub: SubmoduleStatus::default(),
                mode_h: FileMode::REGULAR,
                mode_i: FileMode::REGULAR,
                mode_w: FileMode::REGULAR,
                hash_h: HASH_A.to_string(),
                hash_i: HASH_A.to_string(),
                score: "R100".to_string(),
                path: "file_renamed.txt".to_string(),
                orig: "file_original.txt".to_string(),
            }),
            Entry::Unmerged(UnmergedEntry {
                xy: xy(State::UPDATED_UNMERGED, State::UPDATED_UNMERGED),
                sub: SubmoduleStatus::default(),
                mode_1: FileMode::REGULAR,
                mode_2: FileMode::REGULAR,
                mode_3: FileMode::REGULAR,
                mode_w: FileMode::REGULAR,
                hash_1: HASH_A.to_string(),
                hash_2: HASH_B.to_string(),
                hash_3: HASH_C.to_string(),
                path: "file_unmerged.txt".to_string(),
            }),
            Entry::Untracked(UntrackedEntry {
                path: "file_untracked.txt".to_string(),
            }),
            Entry::Ignored(IgnoredEntry {
                path: "file_ignored.txt".to_string(),
            }),
        ],
    }
}

#[cfg(test)]
mod v2_parse_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_sample() -> anyhow::Result<()> {
        let status = v2::parse(&v2_sample('\n')[..])?;
        assert_eq!(status, expected_sample());
        Ok(())
    }

    #[test]
    fn test_parse_z_full_sample() -> anyhow::Result<()> {
        let status = v2::parse_z(&v2_sample('\0')[..])?;
        assert_eq!(status, expected_sample());
        Ok(())
    }

    #[test]
    fn test_parse_twice_is_equal() -> anyhow::Result<()> {
        let input = v2_sample('\n');
        assert_eq!(v2::parse(&input[..])?, v2::parse(&input[..])?);
        Ok(())
    }

    #[test]
    fn test_scenario_changed_then_untracked() -> anyhow::Result<()> {
        let status =
            v2::parse_z(&b"1 M. N... 100644 100644 100644 h1 h2 file.txt\0? untracked.txt\0"[..])?;
        let kinds: Vec<EntryKind> = status.entries.iter().map(Entry::kind).collect();
        assert_eq!(kinds, vec![EntryKind::Changed, EntryKind::Untracked]);
        let Entry::Changed(changed) = &status.entries[0] else {
            panic!("expected changed entry");
        };
        assert_eq!(changed.path, "file.txt");
        assert_eq!(changed.hash_h, "h1");
        assert_eq!(changed.hash_i, "h2");
        assert_eq!(status.entries[1].path(), "untracked.txt");
        Ok(())
    }

    #[test]
    fn test_scenario_rename_z() -> anyhow::Result<()> {
        let status =
            v2::parse_z(&b"2 R. N... 100644 100644 100644 h1 h2 R100 new.txt\0old.txt\0"[..])?;
        let [Entry::RenameOrCopy(entry)] = &status.entries[..] else {
            panic!("expected one rename entry, got {:?}", status.entries);
        };
        assert_eq!(entry.path, "new.txt");
        assert_eq!(entry.orig, "old.txt");
        assert_eq!(entry.score, "R100");
        Ok(())
    }

    #[test]
    fn test_scenario_truncated_rename_z() {
        let result = v2::parse_z(&b"2 R. N... 100644 100644 100644 h1 h2 R100 new.txt\0"[..]);
        assert!(matches!(result, Err(PorcelainError::TruncatedRenameOrCopy)));
    }

    #[test]
    fn test_scenario_branch_ab_and_stash() -> anyhow::Result<()> {
        let status = v2::parse(&b"# branch.ab +6 -3\n# stash 3\n"[..])?;
        assert_eq!(
            status.branch,
            Some(BranchInfo {
                ahead: 6,
                behind: 3,
                ..BranchInfo::default()
            })
        );
        assert_eq!(status.stash, Some(StashInfo { count: 3 }));
        Ok(())
    }

    #[test]
    fn test_scenario_unknown_header() -> anyhow::Result<()> {
        assert_eq!(v2::parse(&b"# totally.unknown foo\n"[..])?, Status::default());
        Ok(())
    }

    #[test]
    fn test_final_record_without_terminator() -> anyhow::Result<()> {
        let status = v2::parse(&b"? a.txt\n? b.txt"[..])?;
        assert_eq!(status.entries.len(), 2);
        assert_eq!(status.entries[1].path(), "b.txt");
        Ok(())
    }

    #[test]
    fn test_empty_lines_are_skipped() -> anyhow::Result<()> {
        let status = v2::parse(&b"\n\n? a.txt\n\n"[..])?;
        assert_eq!(status.entries.len(), 1);
        Ok(())
    }

    #[test]
    fn test_unknown_discriminant_skipped() -> anyhow::Result<()> {
        let status = v2::parse(&b"? a.txt\nx something new\n! b.txt\n"[..])?;
        let paths: Vec<&str> = status.entries.iter().map(Entry::path).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn test_malformed_branch_ab_does_not_create_branch() -> anyhow::Result<()> {
        let status = v2::parse(&b"# branch.ab +x -3\n# stash 1\n"[..])?;
        assert!(status.branch.is_none());
        assert_eq!(status.stash, Some(StashInfo { count: 1 }));
        Ok(())
    }

    #[test]
    fn test_repeated_stash_header_keeps_last() -> anyhow::Result<()> {
        let status = v2::parse(&b"# stash 1\n# stash 4\n"[..])?;
        assert_eq!(status.stash, Some(StashInfo { count: 4 }));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_header_is_dropped() -> anyhow::Result<()> {
        let status = v2::parse(&b"# branch.head ma\xffin\n? a.txt\n"[..])?;
        assert!(status.branch.is_none());
        assert_eq!(status.entries.len(), 1);
        Ok(())
    }

    #[test]
    fn test_structural_error_is_terminal() {
        let err = v2::parse(&b"? a.txt\n1 M. N... 100644\n? b.txt\n"[..]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid changed record"), "{message}");
        assert!(message.contains("1 M. N... 100644"), "{message}");
    }

    #[test]
    fn test_tab_rename_in_z_mode_fails() {
        // In -z output a tab is an ordinary path byte, so the NUL separator is missing.
        let input = format!("{}\0", v2_renamed('\t'));
        let result = v2::parse_z(input.as_bytes());
        assert!(matches!(result, Err(PorcelainError::TruncatedRenameOrCopy)));
    }

    #[test]
    fn test_record_too_long() {
        let options = ParseOptions::default().max_record_len(32);
        let input = format!("{V2_CHANGED}\n");
        let result = v2::parse_with(input.as_bytes(), Framing::Lines, &options);
        assert!(matches!(result, Err(PorcelainError::RecordTooLong { max: 32 })));
    }

    #[test]
    fn test_golden_entries_from_git_fixtures() -> anyhow::Result<()> {
        let input = "\
1 MM SCM. 100644 100644 100644 f2376e2bab6c5194410bd8a55630f83f933d2f34 543f44d8a781da3a5623de35c3e20b21df7c4557 submodule_path
1 .D N... 100644 100644 000000 98c28f9a9834de8aa406c64935e72f5851fddcc3 98c28f9a9834de8aa406c64935e72f5851fddcc3 file_delete_worktree.txt
2 RT N... 100644 100644 120000 f2376e2bab6c5194410bd8a55630f83f933d2f34 f2376e2bab6c5194410bd8a55630f83f933d2f34 R100 file_renamed_type.txt\tfile_rename_source.txt
2 R. SCM. 160000 160000 160000 abcdef1234567890abcdef1234567890abcdef12 1234567890abcdef1234567890abcdef12345678 R100 submodule_new\tsubmodule_old
u DD N... 100644 000000 000000 000000 f2376e2bab6c5194410bd8a55630f83f933d2f34 0000000000000000000000000000000000000000 0000000000000000000000000000000000000000 merge_both_deleted.txt
u UU SCM. 160000 160000 160000 160000 abcdef1234567890abcdef1234567890abcdef12 1234567890abcdef1234567890abcdef12345678 fedcba0987654321fedcba0987654321fedcba09 submodule_conflict
";
        let status = v2::parse(input.as_bytes())?;
        assert_eq!(status.entries.len(), 6);

        let Entry::Changed(submodule) = &status.entries[0] else {
            panic!("expected changed entry");
        };
        assert_eq!(
            submodule.sub,
            SubmoduleStatus {
                is_submodule: true,
                commit_changed: true,
                has_modifications: true,
                has_untracked: false,
            }
        );

        let Entry::Changed(deleted) = &status.entries[1] else {
            panic!("expected changed entry");
        };
        assert_eq!(deleted.xy.y, State::DELETED);
        assert_eq!(deleted.mode_w, FileMode::EMPTY);

        let Entry::RenameOrCopy(typed) = &status.entries[2] else {
            panic!("expected rename entry");
        };
        assert_eq!(typed.mode_w, FileMode::SYMLINK);
        assert_eq!(typed.orig, "file_rename_source.txt");

        let Entry::Unmerged(conflict) = &status.entries[5] else {
            panic!("expected unmerged entry");
        };
        assert_eq!(conflict.mode_1, FileMode::SUBMODULE);
        assert!(conflict.sub.is_submodule);
        Ok(())
    }

    #[test]
    fn test_encode_round_trip_both_framings() -> anyhow::Result<()> {
        let status = expected_sample();
        assert_eq!(v2::parse(&status.encode(Framing::Lines)[..])?, status);
        assert_eq!(v2::parse_z(&status.encode(Framing::Nul)[..])?, status);
        Ok(())
    }
}
