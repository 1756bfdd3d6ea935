//! The reference layout: six points on a 3×3 grid over `[0, 9]²`.
//!
//! Inserted in order, the cell lists read head to tail as:
//!
//! ```text
//! cell 0 (0,0): [4, 1, 0]
//! cell 3 (1,0): [5, 3]
//! cell 4 (1,1): [2]
//! ```
//!
//! Every other cell is empty.

use numkit_core::Point2D;

/// Cells per side of the reference grid.
pub const REFERENCE_CELLS_PER_SIDE: u32 = 3;

/// Domain width of the reference grid.
pub const REFERENCE_DOMAIN_WIDTH: f64 = 9.0;

/// The reference batch, in insertion order.
pub fn reference_points() -> Vec<Point2D> {
    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(2.0, 2.0),
        Point2D::new(3.0, 3.0),
        Point2D::new(4.0, 0.0),
        Point2D::new(1.0, 1.0),
        Point2D::new(3.0, 0.0),
    ]
}
