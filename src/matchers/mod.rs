//! Pure substring/approximate-match algorithms.
//!
//! Each matcher is constructed once per pattern (or pattern set) and is
//! then an immutable, `Send + Sync` value safe to share across the rayon
//! pool the query executor scans the corpus with. None of them fold case
//! or otherwise touch their input beyond comparing bytes — folding
//! happens once, at query/corpus ingest (see [`crate::model::Keyword`]).

mod aho_corasick;
mod bm;
mod kmp;
mod levenshtein;

pub use aho_corasick::AhoCorasickMatcher;
pub use bm::BmMatcher;
pub use kmp::KmpMatcher;
pub use levenshtein::LevenshteinScanner;

/// Shared capability for the two single-pattern exact matchers (KMP, BM).
/// The Aho–Corasick matcher is intentionally not part of this trait: it is
/// many-pattern-in, keyword-map-out, a different shape entirely (§4.2).
pub trait ExactMatcher: Send + Sync {
    /// All start indices where the matcher's pattern occurs in `haystack`,
    /// in strictly increasing order. Overlapping occurrences are counted
    /// (e.g. `"aba"` in `"ababa"` yields two matches).
    fn search(&self, haystack: &str) -> Vec<usize>;
}
