//! Progress module containing progress bar functionality.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Progress bar display management for the segments of a download
//!
//! # Examples
//!
//! ```rust
//! use splinter::downloader::DownloaderBuilder;
//! use splinter::progress::StyleOptions;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new()
//!     .style_options(StyleOptions::hidden())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
