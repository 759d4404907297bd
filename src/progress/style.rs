//! Progress bar styling and configuration options.
//!
//! The main bar counts completed segments; each child bar follows the bytes of
//! one segment.
//!
//! # Examples
//!
//! ```rust
//! use splinter::progress::{ProgressBarOpts, StyleOptions};
//!
//! let custom_style = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!         Some("█▉▊▋▌▍▎▏  ".to_string()),
//!         true,
//!         false,
//!     ),
//!     ProgressBarOpts::with_segment_style(),
//! );
//! assert!(custom_style.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Define the downloader style options.
///
/// By default, the main progress bar will stay on the screen upon completion,
/// but the segment bars will be cleared once complete.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the segment counter.
    pub(crate) main: ProgressBarOpts,
    /// Style options for the per-segment bars.
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_SEGMENT_COUNT.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_segment_style(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Style options with every bar hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    /// Get a reference to the main progress bar options.
    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    /// Get a reference to the child progress bar options.
    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Segments done out of the planned count.
    ///
    /// `███████████████████████████████████████ 7/10 segments eta 00:00:02`
    pub const TEMPLATE_SEGMENT_COUNT: &'static str =
        "{bar:40.blue} {pos:>}/{len} segments eta {eta_precise:.blue}";
    /// Bytes of one segment, labelled with the bar message.
    ///
    /// `segment 3 ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 6.40 MiB/6.40 MiB 3.10 MiB/s eta 0s`
    pub const TEMPLATE_SEGMENT_BYTES: &'static str =
        "{msg:>10} {bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = match style.clone().template(&template) {
                Ok(templated) => templated,
                Err(e) => {
                    warn!("Ignoring progress template {:?}: {}", template, e);
                    style
                }
            };
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] for per-segment byte progress.
    pub fn with_segment_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_SEGMENT_BYTES.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
