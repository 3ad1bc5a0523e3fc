//! Command-line interface for the stepchart utility
//!
//! Provides a CLI to convert Amazon States Language documents into
//! Mermaid flowchart text.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use stepchart::asl::StateKind;
use stepchart::core::logging::init_logging;
use stepchart::flowchart::FlowchartCompiler;
use stepchart::Direction;

/// Stepchart - Convert Amazon States Language to Mermaid flowcharts
#[derive(Parser)]
#[command(name = "stepchart")]
#[command(about = "A Rust utility to convert Amazon States Language documents to Mermaid flowcharts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an ASL document to a Mermaid flowchart
    Convert {
        /// Input file containing the document, JSON or YAML (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the flowchart text (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Flow direction of the generated chart
        #[arg(long, value_enum, default_value_t = DirectionChoice::Tb)]
        direction: DirectionChoice,
    },

    /// Check whether a document is a renderable state machine
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show supported state types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported flow directions
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DirectionChoice {
    /// Top to bottom
    #[default]
    Tb,
    /// Left to right
    Lr,
    /// Right to left
    Rl,
    /// Bottom to top
    Bt,
}

impl From<DirectionChoice> for Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Tb => Direction::TopDown,
            DirectionChoice::Lr => Direction::LeftRight,
            DirectionChoice::Rl => Direction::RightLeft,
            DirectionChoice::Bt => Direction::BottomUp,
        }
    }
}

/// Main CLI application
#[derive(Default)]
pub struct StepchartApp;

impl StepchartApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("STEPCHART_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("STEPCHART_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Stepchart v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                direction,
            } => self.convert_command(input, output, direction, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
            Commands::Types { json } => self.types_command(json, cli.verbose),
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        direction: DirectionChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mut compiler = FlowchartCompiler::with_direction(direction.into());
        let mermaid = compiler
            .compile(&content)?
            .ok_or_else(|| anyhow!("document has nothing to render (missing StartAt or empty States)"))?;

        if verbose {
            eprintln!("Successfully compiled document to a flowchart");
        }

        self.write_output(output, &mermaid)?;
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let document = stepchart::load(&content)
            .map_err(|e| anyhow!("document is malformed: {}", e))?;

        if !document.has_minimum_shape() {
            return Err(anyhow!(
                "document parsed but is not a renderable state machine (missing StartAt or empty States)"
            ));
        }

        println!("valid: {} state(s), StartAt {}",
            document.states.len(),
            document.start_at.as_deref().unwrap_or_default());
        Ok(())
    }

    /// Handle the types command
    fn types_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported state types");
        }

        if json {
            let types = serde_json::json!({
                "supported_types": StateKind::names(),
                "total": StateKind::names().len(),
            });
            println!("{}", serde_json::to_string_pretty(&types)?);
        } else {
            println!("Supported state types:");
            for name in StateKind::names() {
                println!("  {}", name);
            }
            println!();
            println!("Total: {} state types supported", StateKind::names().len());
        }

        Ok(())
    }

    /// Read input from a file or stdin (`-` or no path)
    fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(ref path) if path.to_str() != Some("-") => {
                fs::read_to_string(path)
                    .map_err(|e| anyhow!("failed to read {}: {}", path.display(), e))
            }
            _ => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    /// Write output to a file or stdout (`-` or no path)
    fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(ref path) if path.to_str() != Some("-") => {
                fs::write(path, content)
                    .map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))
            }
            _ => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(content.as_bytes())?;
                Ok(())
            }
        }
    }
}
