//! External collaborator traits (§6) and the corpus cache built from them.
//!
//! The real system stores applicants in a relational database and extracts
//! PDF text with a dedicated library; both are out of scope for this core
//! (spec.md §1). These traits pin down the *interfaces* the core depends
//! on, with minimal concrete implementations (JSON fixture store, plain-text
//! reader) that are enough to run the CLI and integration tests end-to-end.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::model::ResumeRecord;

/// One applicant record as returned by the join the real store would
/// perform across `ApplicantProfile` and `ApplicationDetail`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantRecord {
    pub applicant_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub address: String,
    pub phone_number: String,
    pub cv_path: String,
}

/// Applicant identity and storage lookup — stands in for the relational
/// `ApplicantProfile`/`ApplicationDetail` pair described in spec.md §6.
pub trait ApplicantStore: Send + Sync {
    fn get_all_applicant_data_joined(&self) -> CoreResult<Vec<ApplicantRecord>>;
}

/// Reads applicant records from a flat `applicants.json` file — a fixture
/// store sufficient to exercise the core without a live database.
pub struct JsonApplicantStore {
    path: PathBuf,
}

impl JsonApplicantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ApplicantStore for JsonApplicantStore {
    fn get_all_applicant_data_joined(&self) -> CoreResult<Vec<ApplicantRecord>> {
        let text = std::fs::read_to_string(&self.path)?;
        let records: Vec<ApplicantRecord> = serde_json::from_str(&text)?;
        Ok(records)
    }
}

/// PDF-to-text extraction — stands in for the real PyPDF2-backed extractor
/// (spec.md §6). On failure, implementations return the empty string and
/// log, rather than propagating an error: the core treats empty text as
/// "no matches", never as a load failure.
pub trait PdfExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> String;
}

/// Reads the résumé file as UTF-8 text. CV fixtures for this crate are
/// plain `.txt` files rather than real PDFs (PDF parsing itself is out of
/// scope, spec.md §1) — the trait boundary is what matters.
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to extract résumé text");
                String::new()
            }
        }
    }
}

/// Test/demo double that always fails extraction, to exercise the "empty
/// text is not an error" contract.
pub struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_text(&self, path: &Path) -> String {
        tracing::warn!(path = %path.display(), "simulated extraction failure");
        String::new()
    }
}

/// The immutable, in-memory corpus the query executor scans. Built once at
/// startup; never mutated afterwards (spec.md §3 Lifecycle).
#[derive(Debug, Default)]
pub struct CorpusCache {
    records: Vec<ResumeRecord>,
}

impl CorpusCache {
    /// Joins store records with extracted, lowercased CV text. A résumé
    /// whose text cannot be extracted is kept with empty `cv_text` (so it
    /// silently contributes zero matches, per spec.md §4.4) rather than
    /// failing the whole load. `corpus_root` is the fixed resource root
    /// that `cv_path` entries are relative to (spec.md §6, `archive/data/`
    /// in the original system).
    pub fn load(
        store: &dyn ApplicantStore,
        extractor: &dyn PdfExtractor,
        corpus_root: &Path,
    ) -> CoreResult<Self> {
        let applicant_records = store.get_all_applicant_data_joined()?;
        let mut records = Vec::with_capacity(applicant_records.len());

        for applicant in applicant_records {
            let cv_path = corpus_root.join(&applicant.cv_path);
            let cv_text = extractor.extract_text(&cv_path).to_lowercase();
            if cv_text.is_empty() {
                tracing::warn!(
                    applicant_id = applicant.applicant_id,
                    cv_path = %cv_path.display(),
                    "résumé text is empty; applicant will never match"
                );
            }
            records.push(ResumeRecord {
                id: applicant.applicant_id,
                name: format!("{} {}", applicant.first_name, applicant.last_name),
                phone: applicant.phone_number,
                address: applicant.address,
                birthdate: applicant.date_of_birth,
                cv_path,
                cv_text,
            });
        }

        Ok(Self { records })
    }

    /// Builds a cache directly from in-memory records — used by tests that
    /// don't want to go through a filesystem fixture.
    pub fn from_records(records: Vec<ResumeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&ResumeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Rejects an empty corpus with `CorpusUnavailable`, per spec.md §7's
    /// distinction between "no matches" and "nothing to match" — queries
    /// fail fast here rather than returning a vacuous empty result.
    pub fn require_non_empty(&self) -> CoreResult<()> {
        if self.is_empty() {
            Err(CoreError::CorpusUnavailable)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_corpus_is_rejected() {
        let cache = CorpusCache::from_records(Vec::new());
        assert!(matches!(
            cache.require_non_empty(),
            Err(CoreError::CorpusUnavailable)
        ));
    }

    #[test]
    fn non_empty_corpus_passes() {
        let cache = CorpusCache::from_records(vec![ResumeRecord {
            id: 1,
            name: "Jane Doe".into(),
            phone: String::new(),
            address: String::new(),
            birthdate: String::new(),
            cv_path: PathBuf::new(),
            cv_text: "hello".into(),
        }]);
        assert!(cache.require_non_empty().is_ok());
    }
}
