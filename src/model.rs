//! Core data model: keywords, résumé records, queries, and ranked results.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

/// A single case-folded, non-empty keyword. Folding happens exactly once,
/// here, at construction — matchers only ever see already-folded input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keyword(String);

impl Keyword {
    /// Builds a keyword from raw query text: trims whitespace, lowercases,
    /// and rejects the result if empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let folded = raw.trim().to_lowercase();
        if folded.is_empty() {
            None
        } else {
            Some(Self(folded))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form used in `matched` labels, e.g. `"python"` -> `"Python"`.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which matching algorithm drives the exact phase of a query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Knuth–Morris–Pratt, one pattern at a time.
    Kmp,
    /// Boyer–Moore bad-character rule, one pattern at a time.
    Bm,
    /// Aho–Corasick automaton, all patterns in one pass.
    #[default]
    Ac,
}

/// An immutable résumé record in the corpus cache. `cv_text` is already
/// lowercased — matchers never fold it again.
#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub birthdate: String,
    pub cv_path: PathBuf,
    pub cv_text: String,
}

/// Whether a count in an `ApplicantResult::matched` map came from the exact
/// or fuzzy phase. Kept as a typed tag (rather than stuffing " (fuzzy)" into
/// the keyword string everywhere) so callers can filter/branch without
/// parsing the label back apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// The key of an `ApplicantResult::matched` entry: a keyword plus which
/// phase produced it. Renders as `"Python"` or `"Python (fuzzy)"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchLabel {
    pub keyword: Keyword,
    pub kind: MatchKind,
}

impl MatchLabel {
    pub fn exact(keyword: Keyword) -> Self {
        Self {
            keyword,
            kind: MatchKind::Exact,
        }
    }

    pub fn fuzzy(keyword: Keyword) -> Self {
        Self {
            keyword,
            kind: MatchKind::Fuzzy,
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Exact => write!(f, "{}", self.keyword.capitalized()),
            MatchKind::Fuzzy => write!(f, "{} (fuzzy)", self.keyword.capitalized()),
        }
    }
}

/// One applicant's frozen result: per-keyword counts plus the total, sorted
/// and truncated by the ranker. `matched` retains insertion order.
#[derive(Debug, Clone)]
pub struct ApplicantResult {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub birthdate: String,
    pub matched: IndexMap<MatchLabel, usize>,
    pub total: usize,
}

/// A search request. `top_n` is `NonZeroUsize` so "top_n <= 0" (spec.md's
/// `InvalidInput` case) is unrepresentable rather than checked at runtime.
#[derive(Debug, Clone)]
pub struct Query {
    pub keywords_raw: String,
    pub algorithm: Algorithm,
    pub top_n: std::num::NonZeroUsize,
    pub fuzzy_threshold: usize,
}

impl Query {
    pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;
}

/// The shaped result of a query: ranked applicants plus phase timings.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub applicants: Vec<ApplicantResult>,
    pub exact_ms: f64,
    pub fuzzy_ms: Option<f64>,
}
