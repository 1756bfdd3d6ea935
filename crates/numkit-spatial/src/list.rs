//! Intrusive doubly linked cell lists stored in a flat arena.
//!
//! Every point record carries its own `next`/`prev` links as arena
//! indices. [`CellLists`] owns one list head and one population count per
//! cell. Records never refer to each other, or to the grid, by reference,
//! so growing the arena cannot invalidate anything.

use numkit_core::{CellId, Point2D, PointId};
use std::fmt;

/// Sentinel link value meaning "no record".
pub const LIST_NIL: u32 = u32::MAX;

fn link_to_id(link: u32) -> Option<PointId> {
    if link == LIST_NIL {
        None
    } else {
        Some(PointId(link))
    }
}

/// A point record: a position plus its links within a cell list.
///
/// A record is *live* while it is linked into exactly one cell's list, and
/// *removed* once it has been unlinked for good. Removed records keep their
/// arena slot (and therefore their [`PointId`]) forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListPoint2D {
    point: Point2D,
    next: u32,
    prev: u32,
    live: bool,
}

impl ListPoint2D {
    /// A record at `point` that is not linked into any list.
    pub(crate) fn unlinked(point: Point2D) -> Self {
        Self {
            point,
            next: LIST_NIL,
            prev: LIST_NIL,
            live: false,
        }
    }

    /// Current position.
    pub fn point(&self) -> Point2D {
        self.point
    }

    /// Overwrite the position. Only valid while the record is unlinked.
    pub(crate) fn set_point(&mut self, point: Point2D) {
        debug_assert!(!self.live, "moving a linked record corrupts its cell list");
        self.point = point;
    }

    /// Whether this record is first in its cell's list.
    pub fn is_head(&self) -> bool {
        self.prev == LIST_NIL
    }

    /// Whether this record is last in its cell's list.
    pub fn is_tail(&self) -> bool {
        self.next == LIST_NIL
    }

    /// The record after this one, if any.
    pub fn next(&self) -> Option<PointId> {
        link_to_id(self.next)
    }

    /// The record before this one, if any.
    pub fn prev(&self) -> Option<PointId> {
        link_to_id(self.prev)
    }

    /// Whether the record is currently linked into a cell.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub(crate) fn next_link(&self) -> u32 {
        self.next
    }

    pub(crate) fn prev_link(&self) -> u32 {
        self.prev
    }
}

impl fmt::Display for ListPoint2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |link: u32| match link_to_id(link) {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "{} (next: {}, prev: {})",
            self.point,
            show(self.next),
            show(self.prev)
        )?;
        if !self.live {
            write!(f, " [unlinked]")?;
        }
        Ok(())
    }
}

/// Per-cell list heads and population counts.
///
/// The arena itself is owned by the grid and passed in to every mutating
/// call, along with the cell the record belongs to.
#[derive(Clone, Debug)]
pub(crate) struct CellLists {
    heads: Vec<u32>,
    sizes: Vec<u32>,
}

impl CellLists {
    /// Empty lists for `cell_count` cells.
    pub(crate) fn new(cell_count: usize) -> Self {
        Self {
            heads: vec![LIST_NIL; cell_count],
            sizes: vec![0; cell_count],
        }
    }

    pub(crate) fn head(&self, cell: CellId) -> Option<PointId> {
        link_to_id(self.heads[cell.index()])
    }

    pub(crate) fn head_link(&self, cell: CellId) -> u32 {
        self.heads[cell.index()]
    }

    pub(crate) fn size(&self, cell: CellId) -> u32 {
        self.sizes[cell.index()]
    }

    pub(crate) fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Push `arena[idx]` onto the front of `cell`'s list.
    ///
    /// The record must be unlinked and already hold its final coordinate.
    pub(crate) fn link(&mut self, arena: &mut [ListPoint2D], idx: u32, cell: CellId) {
        let c = cell.index();
        let old_head = self.heads[c];

        let rec = &mut arena[idx as usize];
        debug_assert!(!rec.live, "record {idx} linked twice");
        rec.prev = LIST_NIL;
        rec.next = old_head;
        rec.live = true;

        if old_head != LIST_NIL {
            arena[old_head as usize].prev = idx;
        }
        self.heads[c] = idx;
        self.sizes[c] += 1;
    }

    /// Detach `arena[idx]` from `cell`'s list.
    ///
    /// `cell` must be the cell computed from the record's current
    /// coordinate, i.e. the list it is actually linked into.
    pub(crate) fn unlink(&mut self, arena: &mut [ListPoint2D], idx: u32, cell: CellId) {
        let c = cell.index();
        let (next, prev) = {
            let rec = &arena[idx as usize];
            debug_assert!(rec.live, "record {idx} unlinked twice");
            (rec.next, rec.prev)
        };

        self.sizes[c] -= 1;
        if next != LIST_NIL {
            arena[next as usize].prev = prev;
        }
        if prev != LIST_NIL {
            arena[prev as usize].next = next;
        } else {
            self.heads[c] = next;
        }

        let rec = &mut arena[idx as usize];
        rec.next = LIST_NIL;
        rec.prev = LIST_NIL;
        rec.live = false;
    }
}
