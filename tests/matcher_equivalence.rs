use ats_core::matchers::{AhoCorasickMatcher, BmMatcher, ExactMatcher, KmpMatcher};
use proptest::prelude::*;

/// The single strongest property of the exact phase: for any pattern and any
/// haystack, all three algorithms must report exactly the same set of start
/// positions — including overlapping and self-overlapping occurrences.
fn matchers_agree(pattern: &str, haystack: &str) {
    let kmp = KmpMatcher::new(pattern).search(haystack);
    let bm = BmMatcher::new(pattern).search(haystack);
    let ac = AhoCorasickMatcher::new([pattern]);
    let ac_hits = ac
        .search(haystack)
        .get(pattern)
        .cloned()
        .unwrap_or_default();

    assert_eq!(kmp, bm, "KMP/BM disagree for pattern {pattern:?} in {haystack:?}");
    assert_eq!(kmp, ac_hits, "KMP/AC disagree for pattern {pattern:?} in {haystack:?}");
}

proptest! {
    #[test]
    fn kmp_bm_ac_agree_on_random_ascii_inputs(
        pattern in "[a-c]{1,5}",
        haystack in "[a-c]{0,30}",
    ) {
        matchers_agree(&pattern, &haystack);
    }

    #[test]
    fn kmp_bm_ac_agree_when_pattern_is_a_haystack_substring(
        haystack in "[a-d]{5,25}",
        start in 0usize..20,
        len in 1usize..5,
    ) {
        prop_assume!(start + len <= haystack.len());
        let pattern = &haystack[start..start + len];
        matchers_agree(pattern, &haystack);
    }
}
