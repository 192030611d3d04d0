use std::fs;
use std::path::PathBuf;

use po2mo_core::{CompileError, CompileReport, compile_catalog};
use thiserror::Error;
use tracing::info;

use crate::report::{CompileSummary, write_summary};

#[derive(Debug, Error)]
pub enum CompileCommandError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report_path: Option<PathBuf>,
}

pub fn run_compile(options: &CompileOptions) -> Result<CompileReport, CompileCommandError> {
    let report = compile_catalog(&options.input, &options.output)?;
    if let Some(report_path) = &options.report_path {
        let bytes = fs::read(&options.output)?;
        let summary = CompileSummary::new(&options.input, &options.output, &report, &bytes);
        write_summary(report_path, &summary)?;
        info!(report = %report_path.display(), hash = %summary.hash, "wrote compile report");
    }
    Ok(report)
}
