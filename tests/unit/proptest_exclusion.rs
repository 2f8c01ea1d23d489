//! Property-based tests for exclusion expansion
//!
//! Uses proptest to verify properties that should hold for all references.

use proptest::prelude::*;
use versemeter::exclusion::{ExclusionSet, WILDCARD_VERSE_LIMIT};

proptest! {
    /// A chapter wildcard always stands for verses 1 through the limit
    #[test]
    fn wildcard_yields_limit_ids(
        book in "[A-Z][a-z]{2,8}",
        chapter in 1u32..200
    ) {
        let set = ExclusionSet::expand([format!("{book} {chapter}:*")]).unwrap();
        prop_assert_eq!(set.len(), WILDCARD_VERSE_LIMIT as usize);
        for verse in 1..=WILDCARD_VERSE_LIMIT {
            let id = format!("{book} {chapter}:{verse}");
            prop_assert!(set.contains(&id));
        }
    }

    /// A concrete reference expands to exactly itself
    #[test]
    fn concrete_reference_yields_itself(
        number in proptest::option::of(1u32..5),
        book in "[A-Z][a-z]{2,8}",
        chapter in 1u32..200,
        verse in 1u32..500
    ) {
        let book = number.map_or_else(|| book.clone(), |n| format!("{n} {book}"));
        let id = format!("{book} {chapter}:{verse}");
        let set = ExclusionSet::expand([id.as_str()]).unwrap();
        prop_assert_eq!(set.sorted(), vec![id.as_str()]);
    }
}
