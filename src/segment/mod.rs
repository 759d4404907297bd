//! Segment module: the three stages between the probe and the finished file.
//!
//! - [`plan`] - Partition of a resource into index-ordered byte ranges
//! - [`fetch`] - One range-restricted (or whole-file) transfer per segment
//! - [`assemble`] - Ordered write to disk plus size and digest verification
//!
//! # Examples
//!
//! ```rust
//! use splinter::segment::{plan, Segment};
//!
//! // Without range support everything collapses to one whole-file segment.
//! assert_eq!(plan(1000, 10, false), vec![Segment::new(0, 0, 999)]);
//! ```

pub mod assemble;
pub mod fetch;
pub mod plan;

pub use assemble::{assemble, Assembled};
pub use fetch::{fetch_segment, SegmentResult, Transfer};
pub use plan::{plan, Segment, MAX_PARTS};
