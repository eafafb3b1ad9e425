//! Two-phase query executor (spec.md §4.4): an exact phase over all
//! keywords, then a fuzzy phase restricted to keywords with zero exact hits
//! across the whole corpus, followed by ranking and truncation.

use std::time::Instant;

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;

use crate::corpus::CorpusCache;
use crate::error::{CoreError, CoreResult};
use crate::matchers::{AhoCorasickMatcher, BmMatcher, ExactMatcher, KmpMatcher, LevenshteinScanner};
use crate::model::{Algorithm, ApplicantResult, Keyword, MatchLabel, Query, QueryResult};

/// Splits, trims, lowercases, and deduplicates `raw` into an ordered set of
/// keywords. Rejects the query if nothing survives (spec.md §4.1's
/// `InvalidInput` case).
fn parse_keywords(raw: &str) -> CoreResult<IndexSet<Keyword>> {
    let keywords: IndexSet<Keyword> = raw.split(',').filter_map(Keyword::parse).collect();
    if keywords.is_empty() {
        return Err(CoreError::InvalidInput(
            "query must contain at least one non-empty keyword".to_string(),
        ));
    }
    Ok(keywords)
}

enum ExactPhase {
    /// One automaton over every keyword.
    Aho(AhoCorasickMatcher),
    /// One single-pattern matcher per keyword (KMP or BM).
    PerKeyword(Vec<Box<dyn ExactMatcher>>),
}

fn build_exact_phase(algorithm: Algorithm, keywords: &IndexSet<Keyword>) -> ExactPhase {
    match algorithm {
        Algorithm::Ac => ExactPhase::Aho(AhoCorasickMatcher::new(
            keywords.iter().map(Keyword::as_str),
        )),
        Algorithm::Kmp => ExactPhase::PerKeyword(
            keywords
                .iter()
                .map(|k| Box::new(KmpMatcher::new(k.as_str())) as Box<dyn ExactMatcher>)
                .collect(),
        ),
        Algorithm::Bm => ExactPhase::PerKeyword(
            keywords
                .iter()
                .map(|k| Box::new(BmMatcher::new(k.as_str())) as Box<dyn ExactMatcher>)
                .collect(),
        ),
    }
}

/// Per-keyword occurrence count within one résumé's text.
fn exact_counts_for_record(phase: &ExactPhase, keywords: &IndexSet<Keyword>, cv_text: &str) -> Vec<usize> {
    match phase {
        ExactPhase::Aho(ac) => {
            let hits = ac.search(cv_text);
            keywords
                .iter()
                .map(|k| hits.get(k.as_str()).map_or(0, Vec::len))
                .collect()
        }
        ExactPhase::PerKeyword(matchers) => matchers
            .iter()
            .map(|matcher| matcher.search(cv_text).len())
            .collect(),
    }
}

/// Runs `query` against `corpus`, producing ranked, truncated results.
pub fn run_query(query: &Query, corpus: &CorpusCache) -> CoreResult<QueryResult> {
    corpus.require_non_empty()?;
    let keywords = parse_keywords(&query.keywords_raw)?;
    let records = corpus.records();

    let exact_start = Instant::now();
    let phase = build_exact_phase(query.algorithm, &keywords);
    let per_record_exact: Vec<Vec<usize>> = records
        .par_iter()
        .map(|record| exact_counts_for_record(&phase, &keywords, &record.cv_text))
        .collect();
    let exact_ms = exact_start.elapsed().as_secs_f64() * 1000.0;

    let mut corpus_totals = vec![0usize; keywords.len()];
    for counts in &per_record_exact {
        for (total, count) in corpus_totals.iter_mut().zip(counts) {
            *total += count;
        }
    }

    let fuzzy_keyword_indices: Vec<usize> = corpus_totals
        .iter()
        .enumerate()
        .filter(|&(_, &total)| total == 0)
        .map(|(idx, _)| idx)
        .collect();

    let (per_record_fuzzy, fuzzy_ms) = if fuzzy_keyword_indices.is_empty() {
        (None, None)
    } else {
        let fuzzy_start = Instant::now();
        let scanners: Vec<(usize, LevenshteinScanner)> = fuzzy_keyword_indices
            .iter()
            .map(|&idx| {
                let keyword = &keywords[idx];
                (idx, LevenshteinScanner::new(keyword.as_str(), query.fuzzy_threshold))
            })
            .collect();
        let per_record: Vec<Vec<(usize, usize)>> = records
            .par_iter()
            .map(|record| {
                scanners
                    .iter()
                    .map(|(idx, scanner)| (*idx, scanner.search(&record.cv_text).len()))
                    .filter(|(_, count)| *count > 0)
                    .collect()
            })
            .collect();
        let elapsed = fuzzy_start.elapsed().as_secs_f64() * 1000.0;
        (Some(per_record), Some(elapsed))
    };

    let mut applicants: Vec<ApplicantResult> = records
        .iter()
        .zip(per_record_exact.iter())
        .enumerate()
        .map(|(record_idx, (record, exact_counts))| {
            let mut matched: IndexMap<MatchLabel, usize> = IndexMap::new();
            for (keyword, &count) in keywords.iter().zip(exact_counts) {
                if count > 0 {
                    matched.insert(MatchLabel::exact(keyword.clone()), count);
                }
            }
            if let Some(per_record_fuzzy) = &per_record_fuzzy {
                for &(keyword_idx, count) in &per_record_fuzzy[record_idx] {
                    matched.insert(MatchLabel::fuzzy(keywords[keyword_idx].clone()), count);
                }
            }
            let total = matched.values().sum();
            ApplicantResult {
                id: record.id,
                name: record.name.clone(),
                phone: record.phone.clone(),
                address: record.address.clone(),
                birthdate: record.birthdate.clone(),
                matched,
                total,
            }
        })
        .filter(|applicant| !applicant.matched.is_empty())
        .collect();

    // Stable sort: ties keep corpus order, per spec.md §4.5's ranker.
    applicants.sort_by_key(|applicant| std::cmp::Reverse(applicant.total));
    applicants.truncate(query.top_n.get());

    Ok(QueryResult {
        applicants,
        exact_ms,
        fuzzy_ms,
    })
}
