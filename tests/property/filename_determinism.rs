//! Property-based tests for filename derivation

use pippin::filename::{derive_filename, FILENAME_PREFIX, MAX_BASE_CHARS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_filename_is_deterministic(prompt in any::<String>()) {
        prop_assert_eq!(derive_filename(&prompt), derive_filename(&prompt));
    }

    #[test]
    fn test_filename_is_well_formed(prompt in any::<String>()) {
        let name = derive_filename(&prompt);
        prop_assert!(name.starts_with(FILENAME_PREFIX));
        prop_assert!(name.ends_with(".svg"));

        let base = &name[FILENAME_PREFIX.len()..name.len() - ".svg".len()];
        prop_assert!(!base.is_empty());
        prop_assert!(base.chars().count() <= MAX_BASE_CHARS);
        prop_assert!(base
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn test_punctuation_only_falls_back(prompt in "[ .,;:!?'\"()]{0,40}") {
        prop_assert_eq!(derive_filename(&prompt), "pippin_pippin.svg");
    }

    #[test]
    fn test_boilerplate_is_ignored(action in "[a-z]{1,10}( [a-z]{1,10}){0,3}") {
        let prompt = format!("Create an SVG of Pippin {}.", action);
        prop_assert_eq!(
            derive_filename(&prompt),
            format!("pippin_{}.svg", action.replace(' ', "_"))
        );
    }
}
