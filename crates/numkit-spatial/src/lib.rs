//! Uniform 2D binning grid with arena-backed intrusive cell lists.
//!
//! [`ListGrid2D`] partitions a square domain `[0, w]²` into `n × n`
//! equal cells and keeps, for every cell, a doubly linked list of the
//! points currently inside it. Point records live in one append-only
//! arena and link to each other by index, so inserting, moving and
//! removing a point costs O(1) and moving never allocates.
//!
//! # Layout
//!
//! ```text
//! ListGrid2D
//! ├── GridGeometry      (cells_per_side, domain_width, cell_width, EdgeBehavior)
//! ├── Vec<ListPoint2D>  (arena: point + next/prev + live flag, indexed by PointId)
//! └── CellLists         (per-cell head index + population, indexed by CellId)
//! ```
//!
//! Cell `(x, y)` has [`CellId`](numkit_core::CellId) `n * x + y`.
//!
//! # Errors
//!
//! Out-of-domain coordinates are rejected, clamped or wrapped according
//! to [`EdgeBehavior`]. Unknown ids, removed ids and unknown cells are
//! reported as [`GridError`]; no operation leaves the grid half-updated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod iter;
pub mod list;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::GridConfig;
pub use diagnostics::GridStats;
pub use edge::EdgeBehavior;
pub use error::{ConfigError, GridError};
pub use geometry::GridGeometry;
pub use grid::ListGrid2D;
pub use iter::CellIter;
pub use list::{ListPoint2D, LIST_NIL};
