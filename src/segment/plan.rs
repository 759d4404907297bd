//! Segment planning.
//!
//! A plan partitions `[0, total_size - 1]` into contiguous, non-overlapping
//! inclusive ranges. Index order is assembly order.

/// Upper bound on the number of segments of one download.
pub const MAX_PARTS: usize = 64;

/// One unit of work: an inclusive byte range of the remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Zero-based position in the plan.
    pub index: usize,
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl Segment {
    /// Create a new [`Segment`].
    pub fn new(index: usize, start: u64, end: u64) -> Self {
        Self { index, start, end }
    }

    /// The single segment covering a resource of `total_size` bytes.
    ///
    /// An empty or unknown-size resource gets `[0, 0]`; its real length is
    /// taken from the whole-file response instead.
    pub fn whole(total_size: u64) -> Self {
        Self::new(0, 0, total_size.saturating_sub(1))
    }

    /// Number of bytes in the range.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Value of the `Range` header requesting this segment.
    ///
    /// ```rust
    /// use splinter::Segment;
    ///
    /// assert_eq!(Segment::new(1, 250, 499).range_header(), "bytes=250-499");
    /// ```
    pub fn range_header(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

/// Partition a resource of `total_size` bytes into at most `requested_parts`
/// segments.
///
/// Without range support, with `requested_parts <= 1`, or for an empty
/// resource, the plan is the single [`Segment::whole`] segment. Otherwise each
/// segment gets `total_size / parts` bytes and the last one also absorbs the
/// remainder. The part count is capped at [`MAX_PARTS`] and never exceeds
/// `total_size`, so no segment is empty.
///
/// ```rust
/// use splinter::plan;
///
/// let segments = plan(1000, 4, true);
/// let bounds: Vec<_> = segments.iter().map(|s| (s.start, s.end)).collect();
/// assert_eq!(bounds, [(0, 249), (250, 499), (500, 749), (750, 999)]);
/// ```
pub fn plan(total_size: u64, requested_parts: usize, range_supported: bool) -> Vec<Segment> {
    let requested_parts = requested_parts.min(MAX_PARTS);
    if !range_supported || requested_parts <= 1 || total_size == 0 {
        return vec![Segment::whole(total_size)];
    }

    let parts = (requested_parts as u64).min(total_size);
    let each = total_size / parts;

    (0..parts)
        .map(|i| {
            let start = i * each;
            let end = if i == parts - 1 {
                total_size - 1
            } else {
                start + each - 1
            };
            Segment::new(i as usize, start, end)
        })
        .collect()
}
