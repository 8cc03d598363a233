use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use tracing::{error, info};

use qbr::workflow::{report, EXIT_CONFIG, EXIT_IO};
use qbr::{
    create_workflow_span, generate_correlation_id, init_telemetry, Catalog, Cli, CommandSolver,
    FaceletCapture, QbrConfig, ScreenSession, TerminalPresenter, Workflow, WorkflowError,
};

fn main() {
    let cli = Cli::parse();

    let (config, catalog) = match setup(&cli) {
        Ok(loaded) => loaded,
        Err(e) => abort(&e, EXIT_CONFIG),
    };

    let correlation_id = generate_correlation_id();
    let span = create_workflow_span("qbr", &correlation_id, cli.normalize);
    let _guard = span.enter();

    let code = match run(&cli, &config, &catalog) {
        Ok(code) => code,
        Err(e) => abort(&e, EXIT_IO),
    };

    info!(exit_code = code, "QBR finished");
    std::process::exit(code);
}

/// Configuration, logging and translations, in that order
fn setup(cli: &Cli) -> Result<(QbrConfig, Catalog)> {
    let env_loaded = QbrConfig::load_env_file()?;
    let mut config = QbrConfig::load()?;
    cli.apply(&mut config);
    init_telemetry(&config.observability)?;
    if env_loaded {
        info!("Loaded environment variables from .env file");
    }

    let catalog = Catalog::load(&config.locale)?;
    Ok((config, catalog))
}

/// Scan, solve and show the screens; returns the process exit status
fn run(cli: &Cli, config: &QbrConfig, catalog: &Catalog) -> Result<i32> {
    let capture = FaceletCapture::new(cli.capture_source());
    let solver = CommandSolver::from_config(&config.solver);
    let workflow = Workflow::new(&capture, &solver, catalog, cli.normalize);

    let runtime = tokio::runtime::Runtime::new()?;
    let artifacts = match runtime.block_on(workflow.run()) {
        Ok(artifacts) => artifacts,
        Err(WorkflowError::Rejected(code)) => {
            report::print_error(code, catalog);
            return Ok(code.exit_code());
        }
        Err(e) => {
            error!(error = %e, "Workflow aborted");
            eprintln!("{} {}", "qbr:".red(), e);
            return Ok(e.exit_code());
        }
    };
    drop(runtime);

    let stdin = io::stdin();
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout());
    if !io::stdout().is_terminal() {
        presenter = presenter.plain();
    }
    ScreenSession::new(artifacts, cli.normalize, catalog, presenter).run()?;

    Ok(0)
}

/// Report a failure outside the workflow and exit with `code`
fn abort(e: &anyhow::Error, code: i32) -> ! {
    error!(error = %e, exit_code = code, "QBR aborted");
    eprintln!("{} {:#}", "qbr:".red(), e);
    std::process::exit(code);
}
