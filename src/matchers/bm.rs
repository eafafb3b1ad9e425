use std::collections::HashMap;

use super::ExactMatcher;

/// Boyer–Moore matcher using the bad-character rule only (no good-suffix
/// rule) — acceptable per spec.md §4.1 because the exact phase is bounded
/// by total haystack length times keyword count, which is small for this
/// domain.
///
/// Diverges from `original_source/src/algorithm/boyer_moore.py` in one way:
/// after a full match it advances by 1, not by the pattern length `m`. The
/// source's `i += m` advance misses overlapping self-matches (e.g. `"wokwok"`
/// inside `"wokwokwok"` would only be found once), which breaks matcher
/// equivalence with KMP/Aho–Corasick for self-overlapping patterns. This
/// crate resolves that divergence in favor of uniform equivalence (spec.md
/// §9, Open Question, option (b)) — see DESIGN.md.
pub struct BmMatcher {
    pattern: Vec<u8>,
    /// Rightmost index of each byte within the pattern.
    last_occurrence: HashMap<u8, usize>,
}

impl BmMatcher {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        let mut last_occurrence = HashMap::new();
        for (i, &b) in pattern.iter().enumerate() {
            last_occurrence.insert(b, i);
        }
        Self {
            pattern,
            last_occurrence,
        }
    }
}

impl ExactMatcher for BmMatcher {
    fn search(&self, haystack: &str) -> Vec<usize> {
        let pattern = &self.pattern;
        let text = haystack.as_bytes();
        if pattern.is_empty() || text.is_empty() {
            return Vec::new();
        }

        let (n, m) = (text.len(), pattern.len());
        if m > n {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut i = 0usize;
        while i <= n - m {
            let mut j = m as isize - 1;
            while j >= 0 && pattern[j as usize] == text[i + j as usize] {
                j -= 1;
            }
            if j < 0 {
                found.push(i);
                i += 1;
            } else {
                let mismatch = text[i + j as usize];
                let shift = match self.last_occurrence.get(&mismatch) {
                    Some(&last) => (j - last as isize).max(1) as usize,
                    None => j as usize + 1,
                };
                i += shift;
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_non_overlapping_occurrences() {
        let m = BmMatcher::new("he");
        assert_eq!(m.search("he she hers his"), vec![0, 4, 7]);
    }

    #[test]
    fn self_overlapping_pattern_matches_kmp() {
        let m = BmMatcher::new("wokwok");
        assert_eq!(m.search("wokwokwok"), vec![0, 3]);
    }

    #[test]
    fn counts_overlapping_occurrences() {
        let m = BmMatcher::new("aba");
        assert_eq!(m.search("ababa"), vec![0, 2]);
    }

    #[test]
    fn no_match_returns_empty() {
        let m = BmMatcher::new("xyz");
        assert_eq!(m.search("abcdef"), Vec::<usize>::new());
    }

    #[test]
    fn pattern_longer_than_haystack_is_empty() {
        let m = BmMatcher::new("longpattern");
        assert_eq!(m.search("short"), Vec::<usize>::new());
    }
}
