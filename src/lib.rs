// QBR Library - cube scan solving and step-by-step solution screens
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod cube;
pub mod external;
pub mod i18n;
pub mod observability;
pub mod screens;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use cli::Cli;
pub use config::{LocaleConfig, ObservabilityConfig, QbrConfig, SolverConfig};
pub use cube::{CubeState, Face, Move, NotationTable, Turn};
pub use external::{CaptureSource, CommandSolver, FaceletCapture};
pub use i18n::{Catalog, Translator};
pub use observability::{create_workflow_span, OperationTimer};
pub use screens::{NavAction, Presenter, Screen, ScreenContent, ScreenSession, TerminalPresenter};
pub use telemetry::{generate_correlation_id, init_telemetry};
pub use workflow::{
    CubeCapture, CubeSolver, DisplayArtifacts, ErrorCode, RawCapture, Workflow, WorkflowError,
};
