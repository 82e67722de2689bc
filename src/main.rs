//! update-op-deps - go.mod synchronization CLI
//!
//! Updates either the op-geth replace directive (`--geth`) or the direct
//! optimism module dependencies of every registered module, then tidies them.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use update_op_deps::cli::CliArgs;
use update_op_deps::config::UpdateConfig;
use update_op_deps::error::AppError;
use update_op_deps::orchestrator::Orchestrator;
use update_op_deps::output::TextReport;
use update_op_deps::runner::SystemExecutor;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = e
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let version = args.target_version().map_err(AppError::from)?;
    let pipeline = args.pipeline();
    let root = std::env::current_dir()?;

    log::debug!("Running {} pipeline at {} in {}", pipeline, version, root.display());

    let config = UpdateConfig::default();
    let orchestrator = Orchestrator::new(config, SystemExecutor::new(), root);
    let summary = orchestrator.run(pipeline, &version)?;

    let mut stdout = io::stdout().lock();
    TextReport::new().write(&summary, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
