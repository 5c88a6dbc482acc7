//! Error types for single-use global analysis.

use glint_analysis_common::AnalysisError;
use thiserror::Error;

/// Errors that can occur while analyzing a translation unit.
#[derive(Debug, Error)]
pub enum Error {
    /// The front end failed to enumerate declarations or references.
    #[error("Front end error: {0}")]
    FrontEnd(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AnalysisError> for Error {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Parse(msg) => Error::FrontEnd(msg),
            AnalysisError::FileSystem(msg) => Error::FrontEnd(msg),
            AnalysisError::Internal(msg) => Error::Internal(msg),
        }
    }
}
