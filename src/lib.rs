use std::io::Write;

use anyhow::{Context, Result};

pub mod checksum_configs;
pub mod checksum_files;
pub mod hash_utils;

pub use checksum_configs::{parse_checksum_configs, ChecksumConfigs};
pub use checksum_files::{write_records, ChecksumRecord};
pub use hash_utils::{compute_digests, compute_file_digests, Algorithm, Digests, Hasher, BLOCK_SIZE};

pub const REPORT_HEADER: &str = "Generating Checksums in target directory";

/// Hashes the artifact, reports the digests to `out` and writes the checksum
/// files next to the artifact. Nothing is printed or written unless hashing
/// succeeds.
pub fn run<W: Write>(configs: &ChecksumConfigs, out: &mut W) -> Result<Vec<ChecksumRecord>> {
    let digests = compute_file_digests(configs.artifact_path())?;
    let records = checksum_files::records_for(&digests, &configs.artifact_name);

    report(&records, out).context("Failed to print checksum report")?;

    write_records(&configs.target_dir, &records)?;

    Ok(records)
}

fn report<W: Write>(records: &[ChecksumRecord], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for record in records {
        writeln!(out, "{}", record.console_line())?;
    }

    out.flush()
}
