//! SHA-256 checksums for downloaded files.
//!
//! The assembler hashes segments while writing them; [`sha256_file`] computes
//! the same digest for a file already on disk, so a caller can check a
//! previously downloaded archive before fetching it again.
//!
//! # Examples
//!
//! ```rust,no_run
//! use splinter::download::checksum::{matches, sha256_file};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let digest = sha256_file(Path::new("go1.22.0.linux-amd64.tar.gz")).await?;
//! if matches("F6C8A87AA03B92C4B0BF3D558E28EA03006EB29DB78917DAEC5CFB6EC1046265", &digest) {
//!     println!("archive is intact");
//! }
//! # Ok(())
//! # }
//! ```

use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};

/// Buffer size for reading files during checksum calculation (64KB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Calculate the lowercase hex SHA-256 of a file.
pub async fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compare an expected hex digest with a computed one.
///
/// Surrounding whitespace and letter case are ignored.
pub fn matches(expected: &str, actual: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(actual.trim())
}
