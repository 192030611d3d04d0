use std::path::PathBuf;

use thiserror::Error;

use crate::command_compile::{CompileCommandError, CompileOptions, run_compile};
use crate::command_inspect::{InspectCommandError, InspectOptions, run_inspect};
use crate::config::{DEFAULT_CONFIG_PATH, load_config_or_default, resolve_path};
use crate::error::ConfigError;
use crate::logging::init_logging;

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Compile(#[from] CompileCommandError),
    #[error(transparent)]
    Inspect(#[from] InspectCommandError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompileArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
    config_path: PathBuf,
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Compile(CompileArgs),
    Inspect { options: InspectOptions, verbose: bool },
}

pub fn run() -> Result<(), CliAppError> {
    let command = parse_command(std::env::args().skip(1).collect())?;
    match command {
        Command::Compile(args) => {
            init_logging(args.verbose);
            let options = resolve_compile_options(args)?;
            let report = run_compile(&options)?;
            println!("Found {} translation entries", report.entries);
            println!("Successfully generated MO file");
            Ok(())
        }
        Command::Inspect { options, verbose } => {
            init_logging(verbose);
            println!("{}", run_inspect(&options)?);
            Ok(())
        }
    }
}

fn parse_command(args: Vec<String>) -> Result<Command, CliAppError> {
    let subcommand = args.first().cloned();
    match subcommand.as_deref() {
        Some("inspect") => parse_inspect_args(args.into_iter().skip(1).collect()),
        Some("compile") => Ok(Command::Compile(parse_compile_args(
            args.into_iter().skip(1).collect(),
        )?)),
        _ => Ok(Command::Compile(parse_compile_args(args)?)),
    }
}

fn parse_compile_args(args: Vec<String>) -> Result<CompileArgs, CliAppError> {
    let mut positional = Vec::new();
    let mut report_path = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut verbose = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--report" => report_path = Some(PathBuf::from(next_value("--report", &mut iter)?)),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            flag if flag.starts_with('-') => return Err(CliAppError::Usage(usage())),
            _ => positional.push(PathBuf::from(&arg)),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional.next();
    let output = positional.next();
    if positional.next().is_some() {
        return Err(CliAppError::Usage(usage()));
    }

    Ok(CompileArgs {
        input,
        output,
        report_path,
        config_path,
        verbose,
    })
}

fn parse_inspect_args(args: Vec<String>) -> Result<Command, CliAppError> {
    let mut path = None;
    let mut verbose = false;
    for arg in args {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            flag if flag.starts_with('-') => return Err(CliAppError::Usage(usage())),
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let path = path.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(Command::Inspect {
        options: InspectOptions { path },
        verbose,
    })
}

fn resolve_compile_options(args: CompileArgs) -> Result<CompileOptions, CliAppError> {
    let config = load_config_or_default(&args.config_path)?;
    let from_config = |value: Option<String>| {
        value.map(|value| resolve_path(&args.config_path, &value))
    };

    let input = args
        .input
        .or_else(|| from_config(config.input))
        .ok_or_else(|| CliAppError::Usage(usage()))?;
    let output = args
        .output
        .or_else(|| from_config(config.output))
        .ok_or_else(|| CliAppError::Usage(usage()))?;
    let report_path = args.report_path.or_else(|| from_config(config.report));

    Ok(CompileOptions {
        input,
        output,
        report_path,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: po2mo [compile] [<input.po> <output.mo>] [--report <path>] [--config <path>] [--verbose]\n       po2mo inspect <file.mo> [--verbose]".to_string()
}
