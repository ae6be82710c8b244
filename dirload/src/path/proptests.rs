//! Property-based tests for path handling.

use super::normalize::{is_absolute, normalize_path_for};
use super::platform::Platform;
use super::split::{join_for, split_for};
use proptest::prelude::*;

// Strategy for generating path-like components, dots included
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        "[a-z0-9_-]{1,8}",
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..8).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    relative_path_strategy().prop_map(|p| format!("/{p}"))
}

// Segments that look like a drive prefix glued to other text
fn drive_like_segment_strategy() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z]",
        prop_oneof![Just(""), Just("."), Just(".."), Just("x")],
    )
        .prop_map(|(letter, rest)| format!("{letter}:{rest}"))
}

// Windows-flavored paths: random separators and an optional drive or UNC root
fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(String::new()),
            Just("C:".to_string()),
            Just(r"C:\".to_string()),
            Just(r"\\".to_string()),
            Just("/".to_string()),
            Just("./".to_string()),
            Just(r".\".to_string()),
        ],
        prop::collection::vec(
            (
                prop_oneof![
                    4 => segment_strategy().boxed(),
                    1 => drive_like_segment_strategy().boxed(),
                ],
                prop_oneof![Just('/'), Just('\\')],
            ),
            0..8,
        ),
    )
        .prop_map(|(root, parts)| {
            let mut path = root;
            for (segment, separator) in parts {
                path.push_str(&segment);
                path.push(separator);
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalize_idempotent_relative(path in relative_path_strategy()) {
        let once = normalize_path_for(Platform::Unix, &path, None);
        let twice = normalize_path_for(Platform::Unix, &once, None);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_idempotent_absolute(path in absolute_path_strategy()) {
        let once = normalize_path_for(Platform::Unix, &path, None);
        let twice = normalize_path_for(Platform::Unix, &once, None);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_idempotent_windows(path in windows_path_strategy()) {
        let once = normalize_path_for(Platform::Windows, &path, None);
        let twice = normalize_path_for(Platform::Windows, &once, None);
        prop_assert_eq!(once, twice);
    }

    // Normalized paths never contain "." or empty segments
    #[test]
    fn normalized_paths_no_current_dir(path in relative_path_strategy()) {
        let normalized = normalize_path_for(Platform::Unix, &path, None);
        if !normalized.is_empty() {
            for segment in normalized.split('/') {
                prop_assert_ne!(segment, ".");
                prop_assert!(!segment.is_empty());
            }
        }
    }

    // Absolute paths resolve every ".." away
    #[test]
    fn absolute_paths_no_parent_refs(path in absolute_path_strategy()) {
        let normalized = normalize_path_for(Platform::Unix, &path, None);
        prop_assert!(normalized.starts_with('/'));
        prop_assert!(!normalized.split('/').any(|s| s == ".."));
    }

    // Relative paths only keep ".." as a leading run
    #[test]
    fn relative_parent_refs_are_leading(path in relative_path_strategy()) {
        let normalized = normalize_path_for(Platform::Unix, &path, None);
        let segments: Vec<&str> = normalized.split('/').collect();
        let leading = segments.iter().take_while(|s| **s == "..").count();
        prop_assert!(!segments[leading..].contains(&".."));
    }

    // Anchoring at an absolute cwd always yields an absolute path
    #[test]
    fn cwd_anchoring_yields_absolute(path in relative_path_strategy(), cwd in absolute_path_strategy()) {
        let normalized = normalize_path_for(Platform::Unix, &path, Some(&cwd));
        prop_assert!(is_absolute(Platform::Unix, &normalized));
    }

    // Joining a path's split halves restores the normalized path
    #[test]
    fn split_join_round_trip(parts in prop::collection::vec("[a-z0-9_-]{1,8}", 1..6)) {
        let path = format!("/{}", parts.join("/"));
        let (dir, file) = split_for(Platform::Unix, &path);
        prop_assert_eq!(join_for(Platform::Unix, dir, file), path);
    }
}
