//! External tool abstractions
//!
//! Adapters that put the real world behind the workflow's collaborator traits:
//! a facelet reader standing in for the camera and a solver run as a child
//! process through a mockable command executor.

pub mod capture;
pub mod command;
pub mod solver;

pub use capture::{scan_facelets, CaptureSource, FaceletCapture};
pub use command::{CommandError, CommandExecutor, CommandOutput, ProcessCommandExecutor};
pub use solver::CommandSolver;
