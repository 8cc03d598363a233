use tracing::{info, warn};

use crate::cube::CubeState;
use crate::observability::OperationTimer;
use crate::workflow::traits::CubeSolver;
use crate::workflow::types::{MoveSequence, SolveOutcome};

/// Ask the oracle for a solution, exactly once.
///
/// Every failure the oracle can report collapses into `SolveOutcome::Failed`;
/// callers only need to know the scan was not usable. Solving is
/// deterministic, so there is no retry.
pub async fn solve(oracle: &dyn CubeSolver, state: &CubeState) -> SolveOutcome {
    let timer = OperationTimer::new("solve");
    let result = oracle.solve(state).await;
    timer.finish();

    match result {
        Ok(moves) => match MoveSequence::tokenize(&moves) {
            Some(sequence) => {
                info!(move_count = sequence.len(), "Solver returned a solution");
                SolveOutcome::Solved(sequence)
            }
            None => {
                warn!("Solver returned an empty solution");
                SolveOutcome::Failed
            }
        },
        Err(e) => {
            warn!(error = %e, "Solver failed");
            SolveOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::traits::{MockCubeSolver, SolverError};

    fn state() -> CubeState {
        CubeState::from_facelets("DRLUUBFBRBLURRLRUBLRDDFDLFUFUFFDBRDUBRUFLLFDDBFLUBLRBD")
    }

    #[tokio::test]
    async fn test_solution_is_tokenized_in_order() {
        let mut oracle = MockCubeSolver::new();
        oracle
            .expect_solve()
            .times(1)
            .returning(|_| Ok("R U R' F2".to_string()));

        match solve(&oracle, &state()).await {
            SolveOutcome::Solved(sequence) => {
                let tokens: Vec<&str> = sequence.tokens().iter().map(|t| t.as_str()).collect();
                assert_eq!(tokens, vec!["R", "U", "R'", "F2"]);
            }
            SolveOutcome::Failed => panic!("expected a solution"),
        }
    }

    #[tokio::test]
    async fn test_every_oracle_error_maps_to_failed() {
        let errors = vec![
            SolverError::Rejected {
                message: "Error 2".to_string(),
            },
            SolverError::Unavailable {
                message: "not installed".to_string(),
            },
            SolverError::Timeout { timeout_ms: 10 },
        ];

        for error in errors {
            let mut oracle = MockCubeSolver::new();
            oracle.expect_solve().times(1).return_const(Err(error));
            assert_eq!(solve(&oracle, &state()).await, SolveOutcome::Failed);
        }
    }

    #[tokio::test]
    async fn test_empty_solution_is_failed() {
        for output in ["", "   ", "\n"] {
            let mut oracle = MockCubeSolver::new();
            oracle
                .expect_solve()
                .times(1)
                .returning(move |_| Ok(output.to_string()));
            assert_eq!(solve(&oracle, &state()).await, SolveOutcome::Failed);
        }
    }

    #[tokio::test]
    async fn test_oracle_receives_the_scanned_state() {
        let mut oracle = MockCubeSolver::new();
        oracle
            .expect_solve()
            .withf(|s| s.facelets().starts_with("DRLUU"))
            .times(1)
            .returning(|_| Ok("U".to_string()));

        assert!(matches!(solve(&oracle, &state()).await, SolveOutcome::Solved(_)));
    }
}
