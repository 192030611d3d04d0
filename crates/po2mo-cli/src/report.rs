use std::fs;
use std::path::Path;

use po2mo_core::CompileReport;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize)]
pub struct CompileSummary {
    pub input: String,
    pub output: String,
    pub entries: usize,
    pub skipped_metadata: usize,
    pub incomplete: usize,
    pub dropped_empty: usize,
    pub size: u64,
    pub hash: String,
}

impl CompileSummary {
    pub fn new(input: &Path, output: &Path, report: &CompileReport, bytes: &[u8]) -> Self {
        Self {
            input: input.display().to_string(),
            output: output.display().to_string(),
            entries: report.entries,
            skipped_metadata: report.skipped_metadata,
            incomplete: report.incomplete,
            dropped_empty: report.dropped_empty,
            size: bytes.len() as u64,
            hash: sha256_hex(bytes),
        }
    }
}

pub fn write_summary(path: &Path, summary: &CompileSummary) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::{CompileSummary, sha256_hex, write_summary};
    use po2mo_core::CompileReport;
    use serde_json::Value;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("po2mo_{name}_{nanos}.json"));
        path
    }

    #[test]
    fn hashes_known_value() {
        assert_eq!(
            sha256_hex(b"hello"),
            "sha256:2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn writes_summary_json() {
        let path = temp_path("summary");
        let report = CompileReport {
            entries: 2,
            skipped_metadata: 1,
            incomplete: 0,
            dropped_empty: 3,
            bytes_written: 5,
        };
        let summary = CompileSummary::new(Path::new("fr.po"), Path::new("fr.mo"), &report, b"bytes");
        write_summary(&path, &summary).expect("write");

        let value: Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(value["entries"], Value::from(2));
        assert_eq!(value["dropped_empty"], Value::from(3));
        assert_eq!(value["size"], Value::from(5));
        assert!(value["hash"].as_str().expect("hash").starts_with("sha256:"));
        fs::remove_file(&path).ok();
    }
}
