//! Command-line surface (spec.md §6), grounded on the `cqs` example's
//! `clap`-derive `Cli`/subcommand layout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::corpus::{CorpusCache, JsonApplicantStore, PlainTextExtractor};
use crate::cv_extractor::{CvFieldExtractor, RegexCvFieldExtractor};
use crate::error::{CoreError, CoreResult};
use crate::executor::run_query;
use crate::model::{Algorithm, Query};

#[derive(Debug, Parser)]
#[command(name = "ats-core", about = "Résumé keyword search and ranking")]
pub struct Cli {
    /// Path to an `ats-core.toml` config file.
    #[arg(long, default_value = "ats-core.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ranks applicants by keyword matches.
    Search {
        /// Comma-separated keywords, e.g. "python, sql".
        #[arg(long)]
        keywords: String,
        #[arg(long)]
        algorithm: Option<Algorithm>,
        #[arg(long)]
        top_n: Option<usize>,
        /// Directory holding `applicants.json` and résumé files.
        #[arg(long)]
        corpus_dir: Option<PathBuf>,
    },
    /// Shows the parsed CV sections for one applicant.
    Detail {
        #[arg(long)]
        applicant_id: u64,
        #[arg(long)]
        corpus_dir: Option<PathBuf>,
    },
}

/// Runs a parsed CLI invocation against the filesystem, printing results to
/// stdout. Split out from `main` so it can be exercised without a process
/// boundary.
pub fn run(cli: Cli) -> CoreResult<()> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Search {
            keywords,
            algorithm,
            top_n,
            corpus_dir,
        } => {
            let corpus_dir = corpus_dir.unwrap_or_else(|| PathBuf::from(&config.corpus_dir));
            let corpus = load_corpus(&corpus_dir)?;
            let top_n = std::num::NonZeroUsize::new(top_n.unwrap_or(config.top_n))
                .ok_or_else(|| CoreError::InvalidInput("top-n must be greater than zero".to_string()))?;
            let query = Query {
                keywords_raw: keywords,
                algorithm: algorithm.unwrap_or(config.algorithm),
                top_n,
                fuzzy_threshold: config.fuzzy_threshold,
            };
            let result = run_query(&query, &corpus)?;
            print_search_result(&result);
        }
        Command::Detail {
            applicant_id,
            corpus_dir,
        } => {
            let corpus_dir = corpus_dir.unwrap_or_else(|| PathBuf::from(&config.corpus_dir));
            let corpus = load_corpus(&corpus_dir)?;
            let record = corpus.find(applicant_id).ok_or_else(|| {
                CoreError::InvalidInput(format!("no applicant with id {applicant_id}"))
            })?;
            let detail = RegexCvFieldExtractor::new().extract(&record.cv_text);
            print_detail(record, &detail);
        }
    }
    Ok(())
}

fn load_corpus(corpus_dir: &std::path::Path) -> CoreResult<CorpusCache> {
    let store = JsonApplicantStore::new(corpus_dir.join("applicants.json"));
    let extractor = PlainTextExtractor;
    CorpusCache::load(&store, &extractor, corpus_dir)
}

fn print_search_result(result: &crate::model::QueryResult) {
    println!(
        "exact phase: {:.2}ms{}",
        result.exact_ms,
        result
            .fuzzy_ms
            .map(|ms| format!(", fuzzy phase: {ms:.2}ms"))
            .unwrap_or_default()
    );
    for applicant in &result.applicants {
        println!("#{} {} — total {}", applicant.id, applicant.name, applicant.total);
        for (label, count) in &applicant.matched {
            println!("    {label}: {count}");
        }
    }
}

fn print_detail(record: &crate::model::ResumeRecord, detail: &crate::cv_extractor::CvDetail) {
    println!("{} (#{})", record.name, record.id);
    println!("phone: {}", record.phone);
    println!("address: {}", record.address);
    println!("birthdate: {}", record.birthdate);
    println!("summary: {}", detail.summary);
    println!("skills: {}", detail.skills.join(", "));
    println!("experience: {}", detail.experience.join("; "));
    println!("education: {}", detail.education.join("; "));
}
