//! Résumé keyword search and ranking core: exact substring matching (KMP,
//! Boyer–Moore, Aho–Corasick), a Levenshtein fuzzy fallback, and the
//! corpus/query/ranking plumbing around them.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod cv_extractor;
pub mod error;
pub mod executor;
pub mod matchers;
pub mod model;
