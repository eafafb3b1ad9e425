use std::num::NonZeroUsize;
use std::path::PathBuf;

use ats_core::corpus::{CorpusCache, FailingExtractor, JsonApplicantStore, PlainTextExtractor};
use ats_core::cv_extractor::{CvFieldExtractor, RegexCvFieldExtractor};
use ats_core::executor::run_query;
use ats_core::model::{Algorithm, MatchKind, Query};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_corpus() -> CorpusCache {
    let dir = fixtures_dir();
    let store = JsonApplicantStore::new(dir.join("applicants.json"));
    let extractor = PlainTextExtractor;
    CorpusCache::load(&store, &extractor, &dir).expect("fixture corpus loads")
}

fn query(keywords_raw: &str, algorithm: Algorithm) -> Query {
    Query {
        keywords_raw: keywords_raw.to_string(),
        algorithm,
        top_n: NonZeroUsize::new(10).unwrap(),
        fuzzy_threshold: Query::DEFAULT_FUZZY_THRESHOLD,
    }
}

#[test]
fn exact_search_ranks_applicants_by_total_matches() {
    let corpus = load_corpus();
    let result = run_query(&query("rust", Algorithm::Ac), &corpus).unwrap();

    // Ada's CV mentions "rust" three times (summary, skills, experience);
    // Bjarne's mentions it once inside "rust-adjacent"; Grace's once.
    assert_eq!(result.applicants[0].id, 1);
    assert!(result.applicants[0].total >= result.applicants[1].total);
}

#[test]
fn applicant_with_unreadable_cv_is_silently_excluded_not_an_error() {
    let corpus = load_corpus();
    let result = run_query(&query("rust", Algorithm::Kmp), &corpus).unwrap();
    assert!(result.applicants.iter().all(|a| a.id != 4));
}

#[test]
fn corpus_wide_extraction_failure_yields_no_results_not_an_error() {
    let dir = fixtures_dir();
    let store = JsonApplicantStore::new(dir.join("applicants.json"));
    let corpus = CorpusCache::load(&store, &FailingExtractor, &dir).expect("corpus still loads");
    let result = run_query(&query("rust", Algorithm::Ac), &corpus).unwrap();
    assert!(result.applicants.is_empty());
}

#[test]
fn fuzzy_phase_recovers_misspelled_keyword_with_zero_exact_hits() {
    let corpus = load_corpus();
    // "docker" has zero exact hits anywhere in the corpus (Grace's résumé
    // misspells it "dcoker"), so it must fall through to the fuzzy phase.
    let result = run_query(&query("docker", Algorithm::Kmp), &corpus).unwrap();
    assert!(result.fuzzy_ms.is_some());
    let grace = result
        .applicants
        .iter()
        .find(|a| a.id == 3)
        .expect("grace is in the corpus");
    assert!(grace
        .matched
        .keys()
        .any(|label| matches!(label.kind, MatchKind::Fuzzy)));
}

#[test]
fn three_algorithms_agree_on_a_multi_keyword_query() {
    let corpus = load_corpus();
    let totals: Vec<usize> = [Algorithm::Kmp, Algorithm::Bm, Algorithm::Ac]
        .into_iter()
        .map(|algorithm| {
            run_query(&query("rust, sql, templates", algorithm), &corpus)
                .unwrap()
                .applicants
                .iter()
                .map(|a| a.total)
                .sum::<usize>()
        })
        .collect();
    assert_eq!(totals, vec![totals[0]; 3]);
}

#[test]
fn top_n_truncates_the_ranked_result() {
    let corpus = load_corpus();
    let mut q = query("rust", Algorithm::Ac);
    q.top_n = NonZeroUsize::new(1).unwrap();
    let result = run_query(&q, &corpus).unwrap();
    assert_eq!(result.applicants.len(), 1);
}

#[test]
fn detail_view_extracts_structured_cv_fields() {
    let corpus = load_corpus();
    let ada = corpus.find(1).expect("ada is in the corpus");
    let detail = RegexCvFieldExtractor::new().extract(&ada.cv_text);
    assert!(detail.summary.contains("rust and python engineer"));
    assert!(detail.skills.iter().any(|s| s == "rust"));
    assert!(!detail.experience.is_empty());
    assert!(!detail.education.is_empty());
}
