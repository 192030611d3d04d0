use std::fs;
use std::io::Write;
use std::path::Path;

use crate::entry::Entry;
use crate::error::CompileError;

pub const MO_MAGIC: u32 = 0x950412de;
pub const MO_VERSION: u32 = 0;
pub const HEADER_LEN: usize = 7 * 4;
pub const DESCRIPTOR_LEN: usize = 2 * 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Descriptor {
    length: u32,
    offset: u32,
}

/// Exact size in bytes of the MO file produced for `entries`.
pub fn encoded_len(entries: &[Entry]) -> usize {
    let pool: usize = entries
        .iter()
        .map(|entry| entry.source.len() + 1 + entry.translation.len() + 1)
        .sum();
    HEADER_LEN + 2 * DESCRIPTOR_LEN * entries.len() + pool
}

/// Encodes entries as a little-endian MO catalog without a hash table.
///
/// Strings are pooled in entry order, source then translation, each NUL-terminated.
pub fn encode_mo(entries: &[Entry]) -> Result<Vec<u8>, CompileError> {
    let total = encoded_len(entries);
    if total > u32::MAX as usize {
        return Err(CompileError::TooLarge);
    }

    let count = entries.len() as u32;
    let sources_offset = HEADER_LEN as u32;
    let translations_offset = sources_offset + DESCRIPTOR_LEN as u32 * count;
    let pool_offset = translations_offset + DESCRIPTOR_LEN as u32 * count;

    let mut sources = Vec::with_capacity(entries.len());
    let mut translations = Vec::with_capacity(entries.len());
    let mut cursor = pool_offset;
    for entry in entries {
        sources.push(descriptor_at(&mut cursor, &entry.source));
        translations.push(descriptor_at(&mut cursor, &entry.translation));
    }

    let mut bytes = Vec::with_capacity(total);
    push_u32(&mut bytes, MO_MAGIC);
    push_u32(&mut bytes, MO_VERSION);
    push_u32(&mut bytes, count);
    push_u32(&mut bytes, sources_offset);
    push_u32(&mut bytes, translations_offset);
    push_u32(&mut bytes, 0);
    push_u32(&mut bytes, 0);

    for descriptor in sources.iter().chain(translations.iter()) {
        push_u32(&mut bytes, descriptor.length);
        push_u32(&mut bytes, descriptor.offset);
    }

    for entry in entries {
        bytes.extend_from_slice(entry.source.as_bytes());
        bytes.push(0);
        bytes.extend_from_slice(entry.translation.as_bytes());
        bytes.push(0);
    }

    Ok(bytes)
}

/// Writes `bytes` to a freshly truncated file at `path`.
pub fn write_mo(path: &Path, bytes: &[u8]) -> Result<(), CompileError> {
    let to_error = |source| CompileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(path).map_err(to_error)?;
    file.write_all(bytes).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    Ok(())
}

fn descriptor_at(cursor: &mut u32, value: &str) -> Descriptor {
    let length = value.len() as u32;
    let descriptor = Descriptor {
        length,
        offset: *cursor,
    };
    *cursor += length + 1;
    descriptor
}

fn push_u32(bytes: &mut Vec<u8>, value: u32) {
    bytes.extend_from_slice(&value.to_le_bytes());
}
