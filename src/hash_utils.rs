use std::fmt;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sha2::Digest;

/// Size of each read from the artifact.
pub const BLOCK_SIZE: usize = 65536;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    /// Report and file order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256];

    /// Name of the sidecar file holding this algorithm's checksum record.
    pub fn file_name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "CHECKSUM.MD5",
            Algorithm::Sha1 => "CHECKSUM.SHA1",
            Algorithm::Sha256 => "CHECKSUM.SHA256",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
        };
        f.write_str(name)
    }
}

/// Running hash state for one algorithm.
#[derive(Clone)]
pub enum Hasher {
    Md5(md5::Md5),
    Sha1(sha1::Sha1),
    Sha256(sha2::Sha256),
}

impl Hasher {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(md5::Md5::new()),
            Algorithm::Sha1 => Self::Sha1(sha1::Sha1::new()),
            Algorithm::Sha256 => Self::Sha256(sha2::Sha256::new()),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => h.update(data),
            Self::Sha1(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
        }
    }

    /// Lowercase hex digest of everything consumed so far. Finalizes a copy, so
    /// the running state is left untouched and repeated calls agree.
    pub fn hex_digest(&self) -> String {
        match self {
            Self::Md5(h) => hex::encode(h.clone().finalize()),
            Self::Sha1(h) => hex::encode(h.clone().finalize()),
            Self::Sha256(h) => hex::encode(h.clone().finalize()),
        }
    }
}

/// Hex digests of one artifact, one per algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digests {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

impl Digests {
    pub fn get(&self, algorithm: Algorithm) -> &str {
        match algorithm {
            Algorithm::Md5 => &self.md5,
            Algorithm::Sha1 => &self.sha1,
            Algorithm::Sha256 => &self.sha256,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &str)> + '_ {
        Algorithm::ALL.into_iter().map(move |algorithm| (algorithm, self.get(algorithm)))
    }
}

/// Streams `reader` to the end in `BLOCK_SIZE` blocks, feeding every block to
/// all three hashers.
pub fn compute_digests<R: Read>(reader: R) -> Result<Digests> {
    compute_digests_in_blocks(reader, BLOCK_SIZE)
}

pub(crate) fn compute_digests_in_blocks<R: Read>(mut reader: R, block_size: usize) -> Result<Digests> {
    let mut hashers = Algorithm::ALL.map(Hasher::new);
    let mut buffer = vec![0; block_size];
    let mut total: u64 = 0;
    loop {
        let bytes = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read artifact"),
        };

        for hasher in hashers.iter_mut() {
            hasher.update(&buffer[..bytes]);
        }
        total += bytes as u64;
    }
    log::debug!("Hashed {} bytes", total);

    let [md5, sha1, sha256] = hashers;
    let digests = Digests {
        md5: md5.hex_digest(),
        sha1: sha1.hex_digest(),
        sha256: sha256.hex_digest(),
    };
    for (algorithm, digest) in digests.iter() {
        log::debug!("{}: {}", algorithm, digest);
    }

    Ok(digests)
}

pub fn compute_file_digests<P: AsRef<Path>>(path: P) -> Result<Digests> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("Failed to open artifact {}", path.display()))?;

    compute_digests(file).with_context(|| format!("Failed to hash {}", path.display()))
}
