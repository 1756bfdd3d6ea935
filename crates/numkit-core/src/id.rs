//! Strongly-typed indices handed out by the spatial index.

use std::fmt;

/// Stable index of a point record inside a grid's arena.
///
/// Issued at insertion time: the i-th point of a batch inserted into an
/// arena of length `n` receives `PointId(n + i)`. Ids are dense, 0-based,
/// and never reused, even after the point has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

impl PointId {
    /// The id as a `usize` arena offset.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PointId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Flat index of a grid cell.
///
/// For a grid with `n` cells per side, cell `(x, y)` has index `n * x + y`,
/// so consecutive `y` values are adjacent in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    /// The id as a `usize` offset into per-cell arrays.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The half-open range of [`PointId`]s issued by a single batch insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointRange {
    start: u32,
    end: u32,
}

impl PointRange {
    /// Range covering `start..end`.
    ///
    /// `end` is clamped up to `start`, so a malformed range is empty rather
    /// than inverted.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// First id in the range (equal to `end()` when empty).
    pub fn start(&self) -> PointId {
        PointId(self.start)
    }

    /// One past the last id in the range.
    pub fn end(&self) -> PointId {
        PointId(self.end)
    }

    /// Number of ids in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The id issued to the `i`-th point of the batch.
    pub fn get(&self, i: usize) -> Option<PointId> {
        if i < self.len() {
            Some(PointId(self.start + i as u32))
        } else {
            None
        }
    }

    /// Whether `id` was issued by this batch.
    pub fn contains(&self, id: PointId) -> bool {
        id.0 >= self.start && id.0 < self.end
    }

    /// Iterate the ids in issue order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PointId> + DoubleEndedIterator {
        (self.start..self.end).map(PointId)
    }
}

impl IntoIterator for PointRange {
    type Item = PointId;
    type IntoIter = std::iter::Map<std::ops::Range<u32>, fn(u32) -> PointId>;

    fn into_iter(self) -> Self::IntoIter {
        (self.start..self.end).map(PointId as fn(u32) -> PointId)
    }
}
