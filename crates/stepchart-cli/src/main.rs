//! Stepchart CLI - Convert Amazon States Language to Mermaid flowcharts

mod cli;

use clap::Parser;
use stepchart::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    // Early init so startup problems are visible; run() reinitializes
    // with the CLI/environment settings.
    if let Err(e) = init_logging(None, None) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::StepchartApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
