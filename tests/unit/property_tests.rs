//! Property tests for the pure validators and the env-file parser.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use saturn_console::domain::env_file::parse_env_string;
use saturn_console::domain::validate::{validate_backup_filename, validate_env_key};

proptest! {
    #[test]
    fn prop_safe_filenames_are_accepted(stem in "[A-Za-z0-9_-]{1,32}") {
        let name = format!("{stem}.sql");
        prop_assert!(validate_backup_filename(&name).is_ok());
    }

    #[test]
    fn prop_filenames_with_path_separators_are_rejected(
        prefix in "[A-Za-z0-9_]{0,8}",
        suffix in "[A-Za-z0-9_]{0,8}",
        sep in prop::sample::select(vec!['/', '\\']),
    ) {
        let name = format!("{prefix}{sep}{suffix}.sql");
        prop_assert!(validate_backup_filename(&name).is_err());
    }

    #[test]
    fn prop_filenames_with_traversal_are_rejected(stem in "[A-Za-z0-9_]{0,8}") {
        let name = format!("..{stem}.sql");
        prop_assert!(validate_backup_filename(&name).is_err());
    }

    #[test]
    fn prop_filenames_without_sql_suffix_are_rejected(name in "[A-Za-z0-9_-]{1,32}") {
        prop_assume!(!name.ends_with(".sql"));
        prop_assert!(validate_backup_filename(&name).is_err());
    }

    #[test]
    fn prop_identifier_keys_are_accepted(key in "[A-Za-z_][A-Za-z0-9_]{0,24}") {
        prop_assert!(validate_env_key(&key).is_ok());
    }

    #[test]
    fn prop_keys_with_leading_digit_are_rejected(key in "[0-9][A-Za-z0-9_]{0,24}") {
        prop_assert!(validate_env_key(&key).is_err());
    }

    #[test]
    fn prop_keys_with_shell_metacharacters_are_rejected(
        key in "[A-Za-z_]{1,8}",
        meta in prop::sample::select(vec!['$', ';', '`', '|', '&', ' ', '\'']),
    ) {
        let key = format!("{key}{meta}");
        prop_assert!(validate_env_key(&key).is_err());
    }

    #[test]
    fn prop_parse_recovers_unquoted_pairs(
        key in "[A-Z_][A-Z0-9_]{0,16}",
        value in "[A-Za-z0-9:/?._-]{0,32}",
    ) {
        let map = parse_env_string(&format!("{key}={value}"));
        prop_assert_eq!(map.get(&key), Some(value.as_str()));
    }

    #[test]
    fn prop_parse_never_yields_more_entries_than_lines(raw in "[ -~\n]{0,256}") {
        let map = parse_env_string(&raw);
        prop_assert!(map.len() <= raw.lines().count());
    }

    #[test]
    fn prop_comment_lines_contribute_nothing(body in "[ -~]{0,40}") {
        let line = format!("# {body}");
        prop_assert!(parse_env_string(&line).is_empty());
    }
}
