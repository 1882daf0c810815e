use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cmake_new::{Config, scaffold};

const LOG_VAR: &str = "CMAKE_NEW_LOG";

/// Create a C++ CMake project from a template
#[derive(Parser)]
#[command(name = "cmake-new")]
struct Cli {
    /// The project name
    project_name: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli.project_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("FAILURE: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(project_name: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let config = Config::from_env();

    scaffold::run(&cwd, project_name, &config)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
