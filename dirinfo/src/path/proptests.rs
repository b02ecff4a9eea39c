//! Property-based tests for path handling.
//!
//! Note: normalize and wrap already carry inline property tests. This module
//! focuses on how validation, normalization and wrapping compose.

use super::normalize::trim_segments;
use super::{is_path_syntax_correct, wrap_path, PathDialect, ValidatedPath};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-z0-9_.-]{1,12}[ ]{0,2}"
}

fn root_slash_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn drive_rooted_strategy() -> impl Strategy<Value = String> {
    ("[a-zA-Z]", prop::collection::vec(segment_strategy(), 1..8))
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

fn any_dialect_path_strategy() -> impl Strategy<Value = (String, PathDialect)> {
    prop_oneof![
        root_slash_strategy().prop_map(|path| (path, PathDialect::RootSlash)),
        drive_rooted_strategy().prop_map(|path| (path, PathDialect::DriveRooted)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Root-slash strings are never drive-rooted
    #[test]
    fn root_slash_excludes_drive_rooted(path in root_slash_strategy()) {
        if is_path_syntax_correct(&path, PathDialect::RootSlash) {
            prop_assert!(!is_path_syntax_correct(&path, PathDialect::DriveRooted));
        }
    }

    // Drive-rooted strings are never root-slash
    #[test]
    fn drive_rooted_excludes_root_slash(path in drive_rooted_strategy()) {
        if is_path_syntax_correct(&path, PathDialect::DriveRooted) {
            prop_assert!(!is_path_syntax_correct(&path, PathDialect::RootSlash));
        }
    }

    // Arbitrary text is never valid in both dialects
    #[test]
    fn no_string_matches_both(text in "\\PC{0,24}") {
        prop_assert!(
            !(is_path_syntax_correct(&text, PathDialect::RootSlash)
                && is_path_syntax_correct(&text, PathDialect::DriveRooted))
        );
    }

    // normalize(normalize(p)) == normalize(p) through the typed API
    #[test]
    fn typed_normalization_idempotent(path in drive_rooted_strategy()) {
        if let Ok(validated) = ValidatedPath::parse(&path, PathDialect::DriveRooted) {
            let once = validated.normalize();
            let twice = trim_segments(once.as_str(), PathDialect::DriveRooted);
            prop_assert_eq!(once.as_str(), twice.as_str());
        }
    }

    // Wrapping a normalized path keeps its segments in order
    #[test]
    fn wrapped_normalized_path_keeps_segments(
        (path, dialect) in any_dialect_path_strategy(),
        width in 1usize..60,
    ) {
        let normalized = trim_segments(&path, dialect);
        let joined: String = wrap_path(&normalized, dialect, width)
            .filter(|line| !line.is_blank())
            .map(|line| line.to_string())
            .collect();
        prop_assert_eq!(joined, normalized);
    }

    // Over-wide lines of a normalized path hold exactly one segment
    #[test]
    fn wrapped_lines_fit_unless_single_segment(
        (path, dialect) in any_dialect_path_strategy(),
        width in 1usize..60,
    ) {
        let normalized = trim_segments(&path, dialect);
        for line in wrap_path(&normalized, dialect, width) {
            if line.len() > width {
                let segments = line
                    .as_str()
                    .split(dialect.separator())
                    .filter(|segment| !segment.is_empty())
                    .count();
                prop_assert_eq!(segments, 1);
            }
        }
    }
}
