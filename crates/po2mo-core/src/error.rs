use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write catalog {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog exceeds the 4 GiB limit of 32-bit offsets")]
    TooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoReadError {
    #[error("mo header too short")]
    TooShort,
    #[error("mo magic mismatch: {0:#010x}")]
    MagicMismatch(u32),
    #[error("unsupported mo version {0}")]
    UnsupportedVersion(u32),
    #[error("{0} out of bounds")]
    OutOfBounds(&'static str),
    #[error("string at offset {0} is not nul-terminated")]
    MissingTerminator(u32),
    #[error("string at offset {0} is not valid utf-8")]
    InvalidUtf8(u32),
}
