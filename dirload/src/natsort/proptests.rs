//! Property-based tests for natural ordering.

use super::{compare, natural_sort};
use proptest::prelude::*;
use std::cmp::Ordering;

struct Tagged(usize, String);

impl AsRef<str> for Tagged {
    fn as_ref(&self) -> &str {
        &self.1
    }
}

// Small alphabet so that digit runs, shared prefixes and ties are common.
fn name_strategy() -> impl Strategy<Value = String> {
    "[aAb0-2 .-]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every string is equal to itself
    #[test]
    fn compare_reflexive(a in name_strategy(), case_sensitive in any::<bool>()) {
        prop_assert_eq!(compare(&a, &a, case_sensitive), Ordering::Equal);
    }

    // compare(a, b) is the reverse of compare(b, a)
    #[test]
    fn compare_antisymmetric(
        a in name_strategy(),
        b in name_strategy(),
        case_sensitive in any::<bool>(),
    ) {
        prop_assert_eq!(
            compare(&a, &b, case_sensitive),
            compare(&b, &a, case_sensitive).reverse()
        );
    }

    // a <= b and b <= c implies a <= c
    #[test]
    fn compare_transitive(
        a in name_strategy(),
        b in name_strategy(),
        c in name_strategy(),
        case_sensitive in any::<bool>(),
    ) {
        if compare(&a, &b, case_sensitive) != Ordering::Greater
            && compare(&b, &c, case_sensitive) != Ordering::Greater
        {
            prop_assert_ne!(compare(&a, &c, case_sensitive), Ordering::Greater);
        }
    }

    // Digit runs order by numeric value
    #[test]
    fn numbers_order_by_magnitude(n in any::<u64>(), m in any::<u64>()) {
        let a = format!("ep{n}.mkv");
        let b = format!("ep{m}.mkv");
        prop_assert_eq!(compare(&a, &b, true), n.cmp(&m));
    }

    // Padding alone puts the padded name first
    #[test]
    fn zero_padding_only_breaks_ties(n in any::<u32>(), zeros in 0usize..5) {
        let padded = format!("track{}{n}", "0".repeat(zeros));
        let plain = format!("track{n}");
        prop_assert_eq!(compare(&padded, &plain, true), 0usize.cmp(&zeros));
    }

    // Padding never outweighs a later difference in magnitude
    #[test]
    fn zero_padding_never_changes_magnitude(
        n in any::<u16>(),
        zeros in 1usize..4,
        m in any::<u16>(),
        k in any::<u16>(),
    ) {
        prop_assume!(m != k);
        let padded = format!("s{}{n}e{m}", "0".repeat(zeros));
        let plain = format!("s{n}e{k}");
        prop_assert_eq!(compare(&padded, &plain, true), m.cmp(&k));
    }

    // Sorting yields a non-decreasing sequence with the same elements
    #[test]
    fn sort_is_ordered_permutation(items in prop::collection::vec(name_strategy(), 0..20)) {
        let mut sorted = items.clone();
        natural_sort(&mut sorted, true);

        for pair in sorted.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1], true), Ordering::Greater);
        }

        let mut expected = items;
        expected.sort();
        let mut actual = sorted;
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    // Elements that compare equal keep their input order
    #[test]
    fn sort_is_stable(items in prop::collection::vec(name_strategy(), 0..20)) {
        let mut tagged: Vec<Tagged> = items
            .into_iter()
            .enumerate()
            .map(|(index, name)| Tagged(index, name))
            .collect();
        natural_sort(&mut tagged, true);

        for pair in tagged.windows(2) {
            if compare(&pair[0].1, &pair[1].1, true) == Ordering::Equal {
                prop_assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    // Case-insensitive comparison ignores ASCII case entirely
    #[test]
    fn case_insensitive_ignores_ascii_case(a in "[a-zA-Z0-9]{0,10}") {
        prop_assert_eq!(
            compare(&a, &a.to_ascii_uppercase(), false),
            Ordering::Equal
        );
    }
}
