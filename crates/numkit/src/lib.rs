//! numkit: a small numerical toolkit built around a uniform 2D binning grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! numkit sub-crates. For most users, adding `numkit` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! // 10×10 cells over the unit square; points outside wrap around.
//! let config = GridConfig::new(10, 1.0).with_edge(EdgeBehavior::Wrap);
//! let mut grid = ListGrid2D::new(config).unwrap();
//!
//! let ids = grid
//!     .insert(&[Point2D::new(0.05, 0.05), Point2D::new(0.55, 0.55)])
//!     .unwrap();
//! let first = ids.start();
//! assert_eq!(grid.cell_of_point(first).unwrap(), CellId(0));
//!
//! // Step across the left edge: the point reappears in the last column.
//! grid.relocate(first, Point2D::new(-0.05, 0.05)).unwrap();
//! assert_eq!(grid.cell_of_point(first).unwrap(), CellId(90));
//! assert_eq!(grid.cell_members(CellId(90)).unwrap(), vec![first]);
//!
//! grid.remove(first).unwrap();
//! assert_eq!(grid.live_count(), 1);
//! grid.verify().unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `numkit-core` | `Point2D`, `PointId`, `CellId`, `PointRange` |
//! | [`spatial`] | `numkit-spatial` | `ListGrid2D`, geometry, cell lists, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and ids (`numkit-core`).
pub use numkit_core as types;

/// The binning grid (`numkit-spatial`).
///
/// [`spatial::ListGrid2D`] is the entry point; [`spatial::GridGeometry`]
/// exposes the coordinate to cell mapping on its own.
pub use numkit_spatial as spatial;

/// Common imports for typical numkit usage.
///
/// ```rust
/// use numkit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use numkit_core::{CellId, Point2D, PointId, PointRange};

    // Grid
    pub use numkit_spatial::{EdgeBehavior, GridConfig, GridStats, ListGrid2D};

    // Errors
    pub use numkit_spatial::{ConfigError, GridError};
}
