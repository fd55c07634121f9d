use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the comparison pipeline. CLI and stage code wraps these
/// in `anyhow` for propagation; tests downcast to assert on the kind.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{}:{}: malformed row: {}", .path.display(), .line, .detail)]
    MalformedRow {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("structure acronym '{acronym}' matches no samples in the annotation file")]
    UnknownStructure { acronym: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CompareError {
    pub fn malformed_row(
        path: impl Into<PathBuf>,
        line: usize,
        detail: impl Into<String>,
    ) -> Self {
        CompareError::MalformedRow {
            path: path.into(),
            line,
            detail: detail.into(),
        }
    }
}
