//! Progress bar display for one download.
//!
//! [`ProgressDisplay`] owns a [`MultiProgress`] holding the segment counter
//! and one child bar per in-flight segment. Fetches running concurrently
//! share it by reference.

use crate::progress::StyleOptions;
use crate::segment::Segment;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager for the segments of a download.
pub struct ProgressDisplay {
    /// The multi-progress instance coordinating every bar.
    multi: MultiProgress,
    /// Counts completed segments.
    main: ProgressBar,
    /// Style options for progress bars.
    style_options: StyleOptions,
    /// Whether the segment counter is shown.
    show_main_progress: bool,
}

impl ProgressDisplay {
    /// Create a new progress display for `segments` segments.
    ///
    /// The segment counter is only shown for ranged downloads.
    pub fn new(style_options: StyleOptions, segments: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let show_main_progress = segments > 1;
        let main = if show_main_progress {
            let main = multi.add(style_options.main().clone().to_progress_bar(segments as u64));
            main.tick();
            main
        } else {
            ProgressBar::hidden()
        };

        Self {
            multi,
            main,
            style_options,
            show_main_progress,
        }
    }

    /// Create the byte progress bar of one segment.
    pub fn create_segment_progress(&self, segment: &Segment, len: u64) -> ProgressBar {
        let pb = self
            .multi
            .add(self.style_options.child().clone().to_progress_bar(len));
        pb.set_message(format!("segment {}", segment.index));
        pb
    }

    /// Finish a segment bar and advance the segment counter.
    pub fn finish_segment(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
        self.main.inc(1);
    }

    /// Finish the progress display, clearing or keeping bars based on configuration.
    pub fn finish(self) {
        if self.show_main_progress {
            if self.style_options.main().clear {
                self.main.finish_and_clear();
            } else {
                self.main.finish();
            }
        }
    }
}
