//! Solver collaborator backed by an external program
//!
//! The program receives the facelet string as its last argument and prints
//! the solution on stdout, the way the `kociemba` command line tool does.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::SolverConfig;
use crate::cube::CubeState;
use crate::external::command::{CommandError, CommandExecutor, ProcessCommandExecutor};
use crate::workflow::{CubeSolver, SolverError};

pub struct CommandSolver {
    program: String,
    args: Vec<String>,
    executor: Arc<dyn CommandExecutor>,
}

impl CommandSolver {
    pub fn new(program: impl Into<String>, args: Vec<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            program: program.into(),
            args,
            executor,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        let executor = match config.timeout_seconds {
            0 => ProcessCommandExecutor::new(),
            seconds => ProcessCommandExecutor::with_timeout(Duration::from_secs(seconds)),
        };
        Self::new(config.program.clone(), config.args.clone(), Arc::new(executor))
    }
}

#[async_trait]
impl CubeSolver for CommandSolver {
    async fn solve(&self, state: &CubeState) -> Result<String, SolverError> {
        let mut args = self.args.clone();
        args.push(state.facelets().to_string());

        debug!(program = %self.program, "Invoking solver");
        let output = self
            .executor
            .execute(&self.program, &args)
            .await
            .map_err(|e| match e {
                CommandError::Timeout { timeout_ms } => SolverError::Timeout { timeout_ms },
                other => SolverError::Unavailable {
                    message: other.to_string(),
                },
            })?;

        let stdout = output.stdout.trim();
        if !output.success() {
            let stderr = output.stderr.trim();
            return Err(SolverError::Rejected {
                message: if stderr.is_empty() { stdout.to_string() } else { stderr.to_string() },
            });
        }
        // The reference solver reports bad cubes on stdout with a zero exit status
        if stdout.starts_with("Error") {
            return Err(SolverError::Rejected {
                message: stdout.to_string(),
            });
        }

        Ok(stdout.to_string())
    }
}
