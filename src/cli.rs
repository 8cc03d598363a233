use clap::Parser;
use std::path::PathBuf;

use crate::config::QbrConfig;
use crate::external::capture::CaptureSource;

#[derive(Parser, Debug)]
#[command(name = "qbr")]
#[command(about = "Solve a scanned Rubik's cube step by step")]
#[command(long_about = "QBR takes a scanned cube state, asks a solver for the shortest way back \
                       and walks you through the solution screen by screen. Give the state with \
                       --state or --state-file, or type it on the first line of stdin.")]
pub struct Cli {
    /// Show the solution normalized, e.g. "R2" becomes "Turn the right side 180 degrees"
    #[arg(short = 'n', long)]
    pub normalize: bool,

    /// Locale for all messages (overrides the configured locale)
    #[arg(long, value_name = "CODE")]
    pub locale: Option<String>,

    /// Scanned facelets in URFDLB order
    #[arg(long, value_name = "FACELETS", conflicts_with = "state_file")]
    pub state: Option<String>,

    /// File containing the scanned facelets
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Solver program to invoke (overrides the configured solver)
    #[arg(long, value_name = "PROGRAM")]
    pub solver: Option<String>,

    /// Directory with {locale}.json translation files
    #[arg(long, value_name = "DIR")]
    pub translations: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold command line overrides into the loaded configuration
    pub fn apply(&self, config: &mut QbrConfig) {
        if let Some(locale) = &self.locale {
            config.locale.locale = locale.clone();
        }
        if let Some(dir) = &self.translations {
            config.locale.translations_dir = Some(dir.to_string_lossy().to_string());
        }
        if let Some(program) = &self.solver {
            config.solver.program = program.clone();
        }
        if self.verbose {
            config.observability.log_level = "debug".to_string();
        }
    }

    pub fn capture_source(&self) -> CaptureSource {
        match (&self.state, &self.state_file) {
            (Some(state), _) => CaptureSource::Inline(state.clone()),
            (None, Some(path)) => CaptureSource::File(path.clone()),
            (None, None) => CaptureSource::Stdin,
        }
    }
}
