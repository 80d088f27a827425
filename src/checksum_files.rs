use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::hash_utils::{Algorithm, Digests};

/// One `<digest>  <file name>` line, as written by `md5sum` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumRecord {
    pub algorithm: Algorithm,
    pub digest: String,
    pub file_name: String,
}

impl ChecksumRecord {
    pub fn new(algorithm: Algorithm, digest: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            algorithm,
            digest: digest.into(),
            file_name: file_name.into(),
        }
    }

    /// The record prefixed with the name of the file it is written to.
    pub fn console_line(&self) -> String {
        format!("{}: {}", self.algorithm.file_name(), self)
    }
}

impl fmt::Display for ChecksumRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.digest, self.file_name)
    }
}

pub(crate) fn records_for(digests: &Digests, file_name: &str) -> Vec<ChecksumRecord> {
    digests
        .iter()
        .map(|(algorithm, digest)| ChecksumRecord::new(algorithm, digest, file_name))
        .collect()
}

/// Overwrites one checksum file per record under `target_dir`. Stops at the
/// first failure; files already written stay in place.
pub fn write_records(target_dir: &Path, records: &[ChecksumRecord]) -> Result<()> {
    for record in records {
        let path = target_dir.join(record.algorithm.file_name());
        fs::write(&path, format!("{}\n", record)).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_digests() -> Digests {
        Digests {
            md5: "900150983cd24fb0d6963f7d28e17f72".to_owned(),
            sha1: "a9993e364706816aba3e25717850c26c9cd0d89d".to_owned(),
            sha256: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad".to_owned(),
        }
    }

    #[test]
    fn record_uses_two_space_separator() {
        let record = ChecksumRecord::new(Algorithm::Md5, "900150983cd24fb0d6963f7d28e17f72", "app.jar");
        assert_eq!(record.to_string(), "900150983cd24fb0d6963f7d28e17f72  app.jar");
        assert_eq!(record.console_line(), "CHECKSUM.MD5: 900150983cd24fb0d6963f7d28e17f72  app.jar");
    }

    #[test]
    fn records_follow_algorithm_order() {
        let records = records_for(&abc_digests(), "app.jar");
        let algorithms: Vec<_> = records.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL);
    }

    #[test]
    fn write_records_truncates_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("CHECKSUM.SHA1");
        fs::write(&stale, "stale contents that are much longer than a sha1 record line\n".repeat(4)).unwrap();

        let records = records_for(&abc_digests(), "app.jar");
        write_records(dir.path(), &records).unwrap();

        for record in &records {
            let written = fs::read_to_string(dir.path().join(record.algorithm.file_name())).unwrap();
            assert_eq!(written, format!("{}\n", record));
        }
    }

    #[test]
    fn missing_target_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let records = records_for(&abc_digests(), "app.jar");
        assert!(write_records(&dir.path().join("missing"), &records).is_err());
    }
}
