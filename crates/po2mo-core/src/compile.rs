use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::CompileError;
use crate::mo_encode::{encode_mo, write_mo};
use crate::po_parser::parse_po;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileReport {
    pub entries: usize,
    pub skipped_metadata: usize,
    pub incomplete: usize,
    pub dropped_empty: usize,
    pub bytes_written: usize,
}

/// Reads the PO catalog at `input`, encodes it and writes the MO catalog to `output`.
///
/// The input is read fully before the output is touched, so a missing input never
/// creates or truncates the output file.
pub fn compile_catalog(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<CompileReport, CompileError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let catalog = parse_po(&text);
    info!(
        input = %input.display(),
        entries = catalog.len(),
        skipped_metadata = catalog.stats.skipped_metadata,
        incomplete = catalog.stats.incomplete,
        dropped_empty = catalog.stats.dropped_empty,
        "parsed catalog"
    );

    let bytes = encode_mo(&catalog.entries)?;
    write_mo(output, &bytes)?;
    info!(output = %output.display(), bytes = bytes.len(), "wrote mo catalog");

    Ok(CompileReport {
        entries: catalog.len(),
        skipped_metadata: catalog.stats.skipped_metadata,
        incomplete: catalog.stats.incomplete,
        dropped_empty: catalog.stats.dropped_empty,
        bytes_written: bytes.len(),
    })
}
