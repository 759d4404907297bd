//! Tests for the progress module functionality.

use splinter::progress::{ProgressBarOpts, StyleOptions};

mod common;
use common::helpers::*;

#[test]
fn test_default_style_options() {
    let style = StyleOptions::default();
    assert!(style.is_enabled());
    assert!(!style.main().clone().to_progress_bar(10).is_hidden());
    assert!(!style.child().clone().to_progress_bar(10).is_hidden());
}

#[test]
fn test_disabled_style_options() {
    let style = create_disabled_style_options();
    assert!(!style.is_enabled());
    assert!(style.main().clone().to_progress_bar(10).is_hidden());
}

#[test]
fn test_partially_enabled_style_options() {
    let style = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::with_segment_style());
    assert!(style.is_enabled());
}

#[test]
fn test_progress_bar_length() {
    let pb = ProgressBarOpts::with_segment_style().to_progress_bar(250);
    assert_eq!(pb.length(), Some(250));
}

#[test]
fn test_invalid_template_falls_back() {
    let opts = ProgressBarOpts::new(
        Some(String::from("{bar:40.blue")),
        Some(String::from(ProgressBarOpts::CHARS_LINE)),
        true,
        true,
    );
    let pb = opts.to_progress_bar(100);
    pb.inc(50);
    assert_eq!(pb.position(), 50);
}
