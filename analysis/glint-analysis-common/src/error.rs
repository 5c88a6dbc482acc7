// analysis/glint-analysis-common/src/error.rs

/// Common error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
