use std::fs;
use std::path::PathBuf;

use po2mo_core::{MoLayout, MoReadError, read_layout};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectCommandError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid mo catalog: {0}")]
    Invalid(#[from] MoReadError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    pub path: PathBuf,
}

pub fn run_inspect(options: &InspectOptions) -> Result<String, InspectCommandError> {
    let bytes = fs::read(&options.path)?;
    let layout = read_layout(&bytes)?;
    Ok(describe(&layout, bytes.len()))
}

fn describe(layout: &MoLayout, file_len: usize) -> String {
    let header = &layout.header;
    format!(
        "magic: {:#010x}\nversion: {}\nentries: {}\nsource table: {}\ntranslation table: {}\nhash table: {} @ {}\nstring pool: {} bytes\nfile size: {} bytes",
        header.magic,
        header.version,
        header.count,
        header.sources_offset,
        header.translations_offset,
        header.hash_table_size,
        header.hash_table_offset,
        layout.pool_len(),
        file_len,
    )
}
