//! Coordinate to cell mapping for a uniform square grid.

use crate::config::GridConfig;
use crate::edge::EdgeBehavior;
use crate::error::GridError;
use numkit_core::{CellId, Point2D};

/// Immutable geometry of a grid: how many cells, how wide, and what
/// happens at the domain edge.
///
/// Cells are stored flat: cell `(x, y)` lives at `cells_per_side * x + y`.
/// Iterating `y` in the inner loop touches contiguous cells, mirroring
/// `array[x][y]` access on a 2D array.
///
/// `GridGeometry` is `Copy` and is passed by value to the list primitives,
/// so point records never need a reference back to their grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    cells_per_side: u32,
    domain_width: f64,
    cell_width: f64,
    edge: EdgeBehavior,
}

impl GridGeometry {
    /// Build the geometry for a config, validating it first.
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            cells_per_side: config.cells_per_side,
            domain_width: config.domain_width,
            cell_width: config.cell_width(),
            edge: config.edge,
        })
    }

    /// Number of cells along each side.
    pub fn cells_per_side(&self) -> u32 {
        self.cells_per_side
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.cells_per_side as usize) * (self.cells_per_side as usize)
    }

    /// Width of the square domain.
    pub fn domain_width(&self) -> f64 {
        self.domain_width
    }

    /// Width of one cell, `domain_width / cells_per_side`.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Edge behavior applied by [`cell_of`](Self::cell_of).
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Flatten in-range cell coordinates into a [`CellId`].
    ///
    /// Use [`checked_cell_index`](Self::checked_cell_index) or
    /// [`wrapped_cell_index`](Self::wrapped_cell_index) for untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not below `cells_per_side`.
    ///
    /// ```
    /// use numkit_core::CellId;
    /// use numkit_spatial::{GridConfig, GridGeometry};
    ///
    /// let geom = GridGeometry::new(&GridConfig::new(7, 13.0)).unwrap();
    /// assert_eq!(geom.cell_index(6, 6), CellId(48));
    /// ```
    pub fn cell_index(&self, cell_x: u32, cell_y: u32) -> CellId {
        assert!(
            cell_x < self.cells_per_side && cell_y < self.cells_per_side,
            "cell ({cell_x}, {cell_y}) outside {n}x{n} grid",
            n = self.cells_per_side
        );
        self.flat(cell_x, cell_y)
    }

    /// Flatten cell coordinates, or `None` if either is outside the grid.
    pub fn checked_cell_index(&self, cell_x: i64, cell_y: i64) -> Option<CellId> {
        let n = self.cells_per_side as i64;
        if (0..n).contains(&cell_x) && (0..n).contains(&cell_y) {
            Some(self.flat(cell_x as u32, cell_y as u32))
        } else {
            None
        }
    }

    /// Flatten cell coordinates after reducing both modulo `cells_per_side`.
    ///
    /// The modulo is mathematical: `-1` maps to `cells_per_side - 1`.
    pub fn wrapped_cell_index(&self, cell_x: i64, cell_y: i64) -> CellId {
        let n = self.cells_per_side as i64;
        self.flat(cell_x.rem_euclid(n) as u32, cell_y.rem_euclid(n) as u32)
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    pub fn cell_coords(&self, cell: CellId) -> (u32, u32) {
        (cell.0 / self.cells_per_side, cell.0 % self.cells_per_side)
    }

    /// Lower (inclusive) and upper (exclusive) corners of a cell.
    pub fn cell_bounds(&self, cell: CellId) -> (Point2D, Point2D) {
        let (cx, cy) = self.cell_coords(cell);
        let w = self.cell_width;
        (
            Point2D::new(cx as f64 * w, cy as f64 * w),
            Point2D::new((cx + 1) as f64 * w, (cy + 1) as f64 * w),
        )
    }

    /// Whether `point` lies in the closed domain `[0, domain_width]²`.
    pub fn contains(&self, point: Point2D) -> bool {
        let w = self.domain_width;
        (0.0..=w).contains(&point.x) && (0.0..=w).contains(&point.y)
    }

    /// The cell a point is binned into.
    ///
    /// Cells include their lower bound and exclude their upper bound, except
    /// that the domain's own upper edge belongs to the last cell. Points
    /// outside the domain are handled per [`EdgeBehavior`]. Non-finite
    /// coordinates are always rejected.
    pub fn cell_of(&self, point: Point2D) -> Result<CellId, GridError> {
        if !point.is_finite() {
            return Err(GridError::NonFiniteCoord { point });
        }
        let ax = self.axis_cell(point.x);
        let ay = self.axis_cell(point.y);
        match self.edge {
            EdgeBehavior::Reject => {
                if !self.contains(point) {
                    return Err(GridError::CoordOutOfDomain {
                        point,
                        domain_width: self.domain_width,
                    });
                }
                Ok(self.clamped_cell_index(ax, ay))
            }
            EdgeBehavior::Clamp => Ok(self.clamped_cell_index(ax, ay)),
            EdgeBehavior::Wrap => Ok(self.wrapped_cell_index(
                self.periodic_axis(point.x, ax),
                self.periodic_axis(point.y, ay),
            )),
        }
    }

    /// Reject cell ids outside the grid.
    pub(crate) fn check_cell(&self, cell: CellId) -> Result<(), GridError> {
        if cell.index() < self.cell_count() {
            Ok(())
        } else {
            Err(GridError::CellOutOfRange {
                cell,
                cell_count: self.cell_count(),
            })
        }
    }

    /// Unbounded cell coordinate along one axis.
    fn axis_cell(&self, v: f64) -> i64 {
        (v / self.cell_width).floor() as i64
    }

    /// Coordinates in `[0, domain_width)` stay in their own period even
    /// when rounding puts `floor(v / cell_width)` at `cells_per_side`.
    /// Everything else, including `domain_width` itself, is left for
    /// [`wrapped_cell_index`](Self::wrapped_cell_index) to fold.
    fn periodic_axis(&self, v: f64, axis_cell: i64) -> i64 {
        if (0.0..self.domain_width).contains(&v) {
            axis_cell.min(self.cells_per_side as i64 - 1)
        } else {
            axis_cell
        }
    }

    /// Cells are laid out `x`-major. Callers guarantee both inputs are in
    /// range.
    fn flat(&self, cell_x: u32, cell_y: u32) -> CellId {
        CellId(self.cells_per_side * cell_x + cell_y)
    }

    /// In-domain rounding can land one past the last cell; clamping also
    /// folds the closed upper edge into the last cell.
    fn clamped_cell_index(&self, cell_x: i64, cell_y: i64) -> CellId {
        let max = self.cells_per_side as i64 - 1;
        self.flat(cell_x.clamp(0, max) as u32, cell_y.clamp(0, max) as u32)
    }
}
