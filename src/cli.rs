use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use symderive::{
    Expression, UtilsError, differentiate, differentiate_prefix, parse_expression, simplify,
    validate_expression_input,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// What the pipeline produces from the parsed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Simplified derivative
    Derivative,
    /// Derivative exactly as the differentiation rules build it
    RawDerivative,
    /// The input itself, simplified
    SimplifyOnly,
}

/// Symderive - Differentiate prefix-notation expressions
#[derive(Parser, Debug)]
#[command(name = "symderive")]
#[command(
    about = "Differentiate a prefix-notation expression in x and print the simplified result"
)]
#[command(version)]
pub struct CliArgs {
    /// Expression such as "(* x (sin x))"; read from stdin when omitted
    pub expression: Option<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print the derivative without simplifying it
    #[arg(long, conflicts_with = "simplify_only")]
    pub raw: bool,

    /// Simplify the input without differentiating it
    #[arg(long)]
    pub simplify_only: bool,
}

impl CliArgs {
    pub fn mode(&self) -> Mode {
        if self.raw {
            Mode::RawDerivative
        } else if self.simplify_only {
            Mode::SimplifyOnly
        } else {
            Mode::Derivative
        }
    }
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: String,
    pub mode: Mode,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    let mode = args.mode();

    let input = match args.expression {
        Some(expression) => expression,
        None => read_line(io::stdin().lock()).context("Failed to read expression from stdin")?,
    };

    Ok(CliConfig {
        input,
        mode,
        log_level: args.log_level,
    })
}

/// Read a single line, without its line terminator
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run one expression through the pipeline selected by `mode`
pub fn process(input: &str, mode: Mode) -> Result<String> {
    let output = match mode {
        Mode::Derivative => differentiate_prefix(input)?,
        Mode::RawDerivative => differentiate(&read_expression(input)?)?.to_string(),
        Mode::SimplifyOnly => simplify(read_expression(input)?).to_string(),
    };
    debug!("Pipeline output ({:?}): {}", mode, output);

    Ok(output)
}

fn read_expression(input: &str) -> Result<Expression> {
    validate_expression_input(input).context("Invalid expression input")?;
    Ok(parse_expression(input).ok_or(UtilsError::EmptyInput)?)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Processing '{}' in {:?} mode", config.input, config.mode);

    let output = process(&config.input, config.mode)?;
    println!("{}", output);
    Ok(())
}
