//! Lane width selection for the adaptive kernels.
//!
//! The planner is a pure function of input length. It walks the input front
//! to back, each time picking the widest lane that still fits the remaining
//! elements: 16, then 8, then 4, then a scalar tail.

/// Lane widths available to the adaptive kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LaneWidth {
    W4,
    W8,
    W16,
}

impl LaneWidth {
    /// Widths from widest to narrowest.
    pub const DESCENDING: [LaneWidth; 3] = [LaneWidth::W16, LaneWidth::W8, LaneWidth::W4];

    /// Number of scalars per lane.
    #[inline]
    pub const fn lanes(self) -> usize {
        match self {
            LaneWidth::W4 => 4,
            LaneWidth::W8 => 8,
            LaneWidth::W16 => 16,
        }
    }

    /// Widest lane that fits in `remaining` elements, if any.
    #[inline]
    pub fn select(remaining: usize) -> Option<LaneWidth> {
        Self::DESCENDING.into_iter().find(|w| remaining >= w.lanes())
    }
}

/// A run of full lanes of one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSegment {
    pub width: LaneWidth,
    /// Index of the first element covered.
    pub start: usize,
    /// Number of full lanes in the run.
    pub lanes: usize,
}

impl LaneSegment {
    /// One past the last element covered.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.lanes * self.width.lanes()
    }
}

/// Iterator over the lane segments for an input of a given length.
///
/// After the iterator is exhausted, [`Cascade::tail_start`] is the first
/// element left for the scalar loop.
#[derive(Debug, Clone)]
pub struct Cascade {
    len: usize,
    pos: usize,
}

impl Cascade {
    /// Plan an input of `len` elements.
    pub fn new(len: usize) -> Self {
        Self { len, pos: 0 }
    }

    /// First element not yet covered by a yielded segment.
    #[inline]
    pub fn tail_start(&self) -> usize {
        self.pos
    }
}

impl Iterator for Cascade {
    type Item = LaneSegment;

    fn next(&mut self) -> Option<LaneSegment> {
        let remaining = self.len - self.pos;
        let width = LaneWidth::select(remaining)?;
        let segment = LaneSegment {
            width,
            start: self.pos,
            lanes: remaining / width.lanes(),
        };
        self.pos = segment.end();
        Some(segment)
    }
}

/// Plan an input of `len` elements.
pub fn cascade(len: usize) -> Cascade {
    Cascade::new(len)
}
