//! Assembly and integrity verification.
//!
//! Fetched segments are written to the destination file strictly in index
//! order, whatever order they completed in. The written byte count must match
//! the expected size; a SHA-256 digest is computed along the way.

use super::fetch::SegmentResult;
use crate::download::checksum;
use crate::error::{Error, Result};

use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};
use tokio::{fs, fs::File, io::AsyncWriteExt};
use tracing::debug;

/// The file produced by [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    /// Path of the written file.
    pub path: PathBuf,
    /// Number of bytes written.
    pub size: u64,
    /// Lowercase hex SHA-256 of the written bytes.
    pub sha256: String,
}

/// Write `results` to `path` in index order and verify the outcome.
///
/// The results must carry exactly the indices `0..results.len()`. When the
/// written size differs from `expected_size`, or the digest differs from
/// `expected_checksum`, an error is returned and the partial file is left on
/// disk; the next download of the same destination removes it.
pub async fn assemble(
    mut results: Vec<SegmentResult>,
    expected_size: u64,
    path: &Path,
    expected_checksum: Option<&str>,
) -> Result<Assembled> {
    results.sort_by_key(|r| r.segment.index);
    if let Some((position, result)) = results
        .iter()
        .enumerate()
        .find(|(position, result)| result.segment.index != *position)
    {
        return Err(Error::Internal(format!(
            "segment {} is missing or duplicated (found segment {} in its place)",
            position, result.segment.index
        )));
    }

    let assemble_error = |source: io::Error| Error::Assemble {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        debug!("Creating destination directory {:?}", dir);
        fs::create_dir_all(dir).await.map_err(assemble_error)?;
    }

    debug!("Creating destination file {:?}", path);
    let mut file = File::create(path).await.map_err(assemble_error)?;
    let mut hasher = Sha256::new();
    let mut written: u64 = 0;

    for result in &results {
        file.write_all(&result.data).await.map_err(assemble_error)?;
        hasher.update(&result.data);
        written += result.size();
    }
    file.flush().await.map_err(assemble_error)?;

    let sha256 = format!("{:x}", hasher.finalize());
    debug!(written, expected_size, %sha256, "Assembled {} segments", results.len());

    if written != expected_size {
        return Err(Error::IncompleteFile {
            path: path.to_path_buf(),
            expected: expected_size,
            written,
        });
    }

    if let Some(expected) = expected_checksum {
        if !checksum::matches(expected, &sha256) {
            return Err(Error::ChecksumMismatch {
                path: path.to_path_buf(),
                expected: expected.to_string(),
                actual: sha256,
            });
        }
    }

    Ok(Assembled {
        path: path.to_path_buf(),
        size: written,
        sha256,
    })
}
