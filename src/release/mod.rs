//! Go release archives and where they live on disk.
//!
//! A version manager keeps everything under one base directory:
//!
//! ```text
//! ~/.gvm/
//! ├── archive/   downloaded release archives
//! ├── goroots/   one extracted tree per version (go<version>/)
//! └── go         symlink to the active tree
//! ```
//!
//! This module only names things. Extraction and switching the active
//! version are left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use splinter::release::{archive_name_for, Layout, Release};
//!
//! assert_eq!(
//!     archive_name_for("1.22.0", "linux", "x86_64")?,
//!     "go1.22.0.linux-amd64.tar.gz"
//! );
//!
//! let layout = Layout::new("/home/gopher/.gvm");
//! let request = Release::new("1.22.0").download_request(&layout)?;
//! assert!(request.directory.ends_with("archive"));
//! # Ok::<(), splinter::Error>(())
//! ```

use crate::download::DownloadRequest;
use crate::error::{Error, Result};

use reqwest::Url;
use std::env::consts::{ARCH, OS};
use std::path::{Path, PathBuf};

/// Where official release archives are published.
pub const DEFAULT_SOURCE: &str = "https://storage.googleapis.com/golang";

/// `User-Agent` sent when fetching release archives.
pub const USER_AGENT: &str = "go-version-manager";

/// Segments used for a release download.
pub const DEFAULT_PARTS: usize = 10;

/// On-disk layout of the version manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base: PathBuf,
}

impl Layout {
    /// Use `base` as the root directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The default layout rooted at `~/.gvm`.
    pub fn from_home() -> Result<Self> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(".gvm")))
            .ok_or_else(|| Error::Internal("cannot determine the home directory".into()))
    }

    /// Root directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory downloaded archives are stored in.
    pub fn archive_dir(&self) -> PathBuf {
        self.base.join("archive")
    }

    /// Directory holding one extracted tree per version.
    pub fn goroots_dir(&self) -> PathBuf {
        self.base.join("goroots")
    }

    /// Extracted tree of `version`.
    pub fn goroot(&self, version: &str) -> PathBuf {
        self.goroots_dir().join(format!("go{}", version))
    }

    /// Symlink pointing at the active tree.
    pub fn active_link(&self) -> PathBuf {
        self.base.join("go")
    }
}

/// A Go release published at a download source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Base URL the archives are published under.
    pub source: String,
    /// Version number, e.g. `1.22.0`.
    pub version: String,
}

impl Release {
    /// A release from the default source.
    ///
    /// A leading `go` is accepted and dropped, so `go1.22.0` and `1.22.0`
    /// name the same release.
    pub fn new(version: &str) -> Self {
        let version = version.trim();
        Self {
            source: String::from(DEFAULT_SOURCE),
            version: version.strip_prefix("go").unwrap_or(version).to_string(),
        }
    }

    /// Use another download source.
    pub fn with_source(self, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..self
        }
    }

    /// Archive name for the host platform.
    pub fn archive_name(&self) -> Result<String> {
        archive_name_for(&self.version, OS, ARCH)
    }

    /// URL of the archive for the host platform.
    pub fn url(&self) -> Result<Url> {
        let raw = format!(
            "{}/{}",
            self.source.trim_end_matches('/'),
            self.archive_name()?
        );
        Url::parse(&raw)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", raw, e)))
    }

    /// A request downloading the archive into `layout`'s archive directory.
    pub fn download_request(&self, layout: &Layout) -> Result<DownloadRequest> {
        let url = self.url()?;
        let filename = self.archive_name()?;
        Ok(DownloadRequest::new(&url, layout.archive_dir(), &filename)
            .with_parts(DEFAULT_PARTS)
            .with_user_agent(USER_AGENT))
    }
}

/// Archive name of `version` for a platform given by Rust's
/// `std::env::consts::{OS, ARCH}` names.
pub fn archive_name_for(version: &str, os: &str, arch: &str) -> Result<String> {
    if version.is_empty() {
        return Err(Error::InvalidVersion("version must not be empty".into()));
    }
    Ok(format!("go{}.{}-{}.tar.gz", version, go_os(os)?, go_arch(arch)?))
}

fn go_os(os: &str) -> Result<&str> {
    match os {
        "windows" => Err(Error::UnsupportedPlatform(
            "windows releases are not tar archives".into(),
        )),
        "macos" => Ok("darwin"),
        other => Ok(other),
    }
}

fn go_arch(arch: &str) -> Result<&str> {
    match arch {
        "x86_64" => Ok("amd64"),
        "x86" => Ok("386"),
        "aarch64" => Ok("arm64"),
        "arm" => Ok("armv6l"),
        "powerpc64" => Ok("ppc64"),
        "loongarch64" => Ok("loong64"),
        "riscv64" | "s390x" | "mips" | "mips64" => Ok(arch),
        other => Err(Error::UnsupportedPlatform(format!(
            "no release archives for architecture {}",
            other
        ))),
    }
}
