use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{LedgerupError, Result};

/// One successful upload, keyed by file checksum so the same workbook is
/// not sent twice by accident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    pub filename: String,
    pub checksum: String,
    pub uploaded_at: String,
    pub accounts: usize,
    pub created: u64,
    pub updated: u64,
}

pub fn compute_checksum(file_path: &Path) -> Result<String> {
    let data = std::fs::read(file_path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}

fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join("history.json")
}

pub fn load_history(data_dir: &Path) -> Vec<UploadRecord> {
    let path = history_path(data_dir);
    if !path.exists() {
        return Vec::new();
    }
    let content = std::fs::read_to_string(&path).unwrap_or_default();
    serde_json::from_str(&content).unwrap_or_default()
}

pub fn record_upload(data_dir: &Path, record: UploadRecord) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let mut records = load_history(data_dir);
    records.push(record);
    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| LedgerupError::Other(e.to_string()))?;
    std::fs::write(history_path(data_dir), format!("{json}\n"))?;
    Ok(())
}

pub fn is_duplicate(data_dir: &Path, checksum: &str) -> bool {
    load_history(data_dir)
        .iter()
        .any(|record| record.checksum == checksum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(checksum: &str) -> UploadRecord {
        UploadRecord {
            filename: "accounts.xlsx".to_string(),
            checksum: checksum.to_string(),
            uploaded_at: "2026-08-07T10:00:00+00:00".to_string(),
            accounts: 6,
            created: 6,
            updated: 0,
        }
    }

    #[test]
    fn test_checksum_is_stable_and_content_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.xlsx");
        let b = dir.path().join("b.xlsx");
        std::fs::write(&a, b"same bytes").unwrap();
        std::fs::write(&b, b"same bytes").unwrap();
        assert_eq!(
            compute_checksum(&a).unwrap(),
            compute_checksum(&b).unwrap()
        );

        std::fs::write(&b, b"other bytes").unwrap();
        assert_ne!(
            compute_checksum(&a).unwrap(),
            compute_checksum(&b).unwrap()
        );
    }

    #[test]
    fn test_record_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_history(dir.path()).is_empty());

        record_upload(dir.path(), record("abc123")).unwrap();
        record_upload(dir.path(), record("def456")).unwrap();

        let records = load_history(dir.path());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].checksum, "abc123");
        assert_eq!(records[1].checksum, "def456");
        assert_eq!(records[0].accounts, 6);
    }

    #[test]
    fn test_duplicate_detection() {
        let dir = tempfile::tempdir().unwrap();
        record_upload(dir.path(), record("abc123")).unwrap();
        assert!(is_duplicate(dir.path(), "abc123"));
        assert!(!is_duplicate(dir.path(), "zzz999"));
    }

    #[test]
    fn test_record_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("ledgerup");
        record_upload(&nested, record("abc123")).unwrap();
        assert!(nested.join("history.json").exists());
    }
}
