// Collaborator boundaries - capture and solving are injected so the
// pipeline can run against mocks in tests

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::cube::CubeState;
use crate::workflow::types::RawCapture;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to read cube state from {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("Solver rejected the cube state: {message}")]
    Rejected { message: String },
    #[error("Solver could not be started: {message}")]
    Unavailable { message: String },
    #[error("Solver timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Produces the scanned cube state, or a positive status code
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CubeCapture: Send + Sync {
    async fn capture(&self) -> Result<RawCapture, CaptureError>;
}

/// Cube solving oracle: facelets in, space delimited move string out
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CubeSolver: Send + Sync {
    async fn solve(&self, state: &CubeState) -> Result<String, SolverError>;
}
