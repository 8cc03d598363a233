// Workflow Module - scan classification, solving and solution formatting
//
// The pipeline is strictly sequential: capture -> classify -> solve -> format.
// Collaborators are injected through traits so every step can be tested
// without a camera or a solver binary.

pub mod classifier;
pub mod formatter;
pub mod report;
pub mod solver;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod mocks;


use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::i18n::Translator;

pub use classifier::classify;
pub use formatter::FormatError;
pub use traits::{CaptureError, CubeCapture, CubeSolver, SolverError};
pub use types::{
    DisplayArtifacts, ErrorCode, MoveSequence, MoveToken, RawCapture, ScanOutcome, SolveOutcome,
    Step, E_ALREADY_SOLVED, E_INCORRECTLY_SCANNED,
};

/// Exit status for internal contract violations (sysexits EX_SOFTWARE)
pub const EXIT_INTERNAL: i32 = 70;
/// Exit status when capture input or the terminal failed (sysexits EX_IOERR)
pub const EXIT_IO: i32 = 74;
/// Exit status when configuration or translations cannot be loaded (sysexits EX_CONFIG)
pub const EXIT_CONFIG: i32 = 78;

/// Why the workflow stopped before any screen was shown
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The scan is unusable; the user sees a localized message
    #[error("Scan rejected with code {}", .0.code())]
    Rejected(ErrorCode),
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl WorkflowError {
    pub fn exit_code(&self) -> i32 {
        match self {
            WorkflowError::Rejected(code) => code.exit_code(),
            WorkflowError::Capture(_) => EXIT_IO,
            WorkflowError::Format(_) => EXIT_INTERNAL,
        }
    }
}

/// One run of the scan -> solve -> format pipeline
pub struct Workflow<'a> {
    capture: &'a dyn CubeCapture,
    solver: &'a dyn CubeSolver,
    translator: &'a dyn Translator,
    normalize: bool,
}

impl<'a> Workflow<'a> {
    pub fn new(
        capture: &'a dyn CubeCapture,
        solver: &'a dyn CubeSolver,
        translator: &'a dyn Translator,
        normalize: bool,
    ) -> Self {
        Self {
            capture,
            solver,
            translator,
            normalize,
        }
    }

    /// Produce the display artifacts, or the reason the run must end.
    ///
    /// The solver is only consulted for a valid scan and at most once.
    pub async fn run(&self) -> Result<Arc<DisplayArtifacts>, WorkflowError> {
        let raw = self.capture.capture().await?;

        let state = match classify(raw) {
            ScanOutcome::Valid(state) => state,
            ScanOutcome::Error(code) => {
                warn!(code = code.code(), "Capture reported an error");
                return Err(WorkflowError::Rejected(code));
            }
        };

        let sequence = match solver::solve(self.solver, &state).await {
            SolveOutcome::Solved(sequence) => sequence,
            SolveOutcome::Failed => return Err(WorkflowError::Rejected(ErrorCode::IncorrectlyScanned)),
        };

        let artifacts = formatter::format(&sequence, self.normalize, self.translator)?;
        info!(
            move_count = artifacts.move_count,
            normalized = self.normalize,
            "Solution ready"
        );

        Ok(Arc::new(artifacts))
    }
}
