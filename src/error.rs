use thiserror::Error;

/// Structured error surface for the matching/ranking core.
///
/// Matchers never fail — they are pure total functions over well-formed
/// input (keywords and haystacks are already case-folded by the time they
/// reach a matcher). Everything that can go wrong is either caught at the
/// query boundary (`InvalidInput`), reflects an empty corpus
/// (`CorpusUnavailable`), or is a bug (`Internal`).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("corpus unavailable: no résumés loaded")]
    CorpusUnavailable,

    #[error("internal error: {0}")]
    Internal(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed applicant store data: {0}")]
    Store(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
