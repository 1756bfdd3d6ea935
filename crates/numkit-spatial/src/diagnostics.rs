//! Occupancy statistics and structural self-checks.
//!
//! [`GridStats`] summarises how points are spread over the cells.
//! [`ListGrid2D::verify`] walks every cell list and checks the linkage
//! invariants; it is meant for tests and debugging, not hot loops.

use crate::error::GridError;
use crate::grid::ListGrid2D;
use crate::list::LIST_NIL;
use numkit_core::CellId;
use std::fmt;

/// Occupancy snapshot of a grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridStats {
    /// Number of cells in the grid.
    pub cell_count: usize,
    /// Records ever inserted (live + removed).
    pub arena_len: usize,
    /// Records currently linked into a cell.
    pub live_points: usize,
    /// Removed records still holding an arena slot.
    pub removed_points: usize,
    /// Cells with no points.
    pub empty_cells: usize,
    /// Largest single-cell population.
    pub max_population: u32,
    /// Live points per cell.
    pub mean_population: f64,
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} live / {} slots over {} cells ({} empty, max {}, mean {:.3})",
            self.live_points,
            self.arena_len,
            self.cell_count,
            self.empty_cells,
            self.max_population,
            self.mean_population
        )
    }
}

fn corrupted(reason: String) -> GridError {
    GridError::Corrupted { reason }
}

impl ListGrid2D {
    /// Summarise current occupancy.
    pub fn stats(&self) -> GridStats {
        let sizes = self.populations();
        GridStats {
            cell_count: sizes.len(),
            arena_len: self.arena_len(),
            live_points: self.live_count(),
            removed_points: self.removed_count(),
            empty_cells: sizes.iter().filter(|&&s| s == 0).count(),
            max_population: sizes.iter().copied().max().unwrap_or(0),
            mean_population: self.live_count() as f64 / sizes.len() as f64,
        }
    }

    /// Check every structural invariant of the cell lists.
    ///
    /// Verifies that each list is a well-formed chain whose `prev` links
    /// mirror its `next` links, whose length matches the cell population,
    /// and whose members all bin into that cell; that every live record is
    /// reachable from exactly one list; and that unlinked records carry no
    /// links. Returns [`GridError::Corrupted`] describing the first
    /// violation found.
    pub fn verify(&self) -> Result<(), GridError> {
        let arena = self.points();
        let sizes = self.populations();

        let total: u64 = sizes.iter().map(|&s| s as u64).sum();
        if total != self.live as u64 {
            return Err(corrupted(format!(
                "populations sum to {total} but {} points are live",
                self.live
            )));
        }

        let mut reached = vec![false; arena.len()];
        for c in 0..sizes.len() {
            let cell = CellId(c as u32);
            let size = sizes[c] as usize;
            let mut expected_prev = LIST_NIL;
            let mut cur = self.lists.head_link(cell);
            let mut steps = 0usize;

            while cur != LIST_NIL {
                let Some(rec) = arena.get(cur as usize) else {
                    return Err(corrupted(format!(
                        "cell {cell} links to point {cur} beyond arena length {}",
                        arena.len()
                    )));
                };
                if reached[cur as usize] {
                    return Err(corrupted(format!("point {cur} reached twice (cell {cell})")));
                }
                reached[cur as usize] = true;
                steps += 1;
                if steps > size {
                    return Err(corrupted(format!(
                        "cell {cell} list is longer than its population {size}"
                    )));
                }
                if !rec.is_live() {
                    return Err(corrupted(format!("removed point {cur} linked into cell {cell}")));
                }
                if rec.prev_link() != expected_prev {
                    return Err(corrupted(format!(
                        "point {cur} in cell {cell} has prev {} but follows {expected_prev}",
                        rec.prev_link()
                    )));
                }
                let home = self.geometry.cell_of(rec.point())?;
                if home != cell {
                    return Err(corrupted(format!(
                        "point {cur} at {} is linked into cell {cell} but bins into {home}",
                        rec.point()
                    )));
                }
                expected_prev = cur;
                cur = rec.next_link();
            }

            if steps != size {
                return Err(corrupted(format!(
                    "cell {cell} list has {steps} points but population {size}"
                )));
            }
        }

        for (i, rec) in arena.iter().enumerate() {
            if rec.is_live() && !reached[i] {
                return Err(corrupted(format!("live point {i} is in no cell list")));
            }
            if !rec.is_live() && (rec.next_link() != LIST_NIL || rec.prev_link() != LIST_NIL) {
                return Err(corrupted(format!("unlinked point {i} still carries links")));
            }
        }
        Ok(())
    }
}
