//! Allocation-free traversal of cell lists.

use crate::list::{ListPoint2D, LIST_NIL};
use numkit_core::PointId;
use std::iter::FusedIterator;

/// Iterator over the members of one cell, head to tail.
///
/// Yields ids in the same order as
/// [`ListGrid2D::cell_members`](crate::ListGrid2D::cell_members), which is
/// most recently linked first.
#[derive(Clone, Debug)]
pub struct CellIter<'a> {
    arena: &'a [ListPoint2D],
    cur: u32,
    remaining: usize,
}

impl<'a> CellIter<'a> {
    pub(crate) fn new(arena: &'a [ListPoint2D], head: u32, len: u32) -> Self {
        Self {
            arena,
            cur: head,
            remaining: len as usize,
        }
    }
}

impl Iterator for CellIter<'_> {
    type Item = PointId;

    fn next(&mut self) -> Option<PointId> {
        if self.cur == LIST_NIL {
            return None;
        }
        let id = PointId(self.cur);
        self.cur = self.arena[self.cur as usize].next_link();
        self.remaining = self.remaining.saturating_sub(1);
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellIter<'_> {}

impl FusedIterator for CellIter<'_> {}
