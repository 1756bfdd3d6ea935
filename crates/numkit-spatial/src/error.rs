//! Error types for grid construction and grid operations.

use numkit_core::{CellId, Point2D, PointId};
use std::error::Error;
use std::fmt;

/// Errors detected by [`GridConfig::validate()`](crate::GridConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `cells_per_side` is zero.
    ZeroCells,
    /// `cells_per_side²` does not fit the 32-bit cell index space.
    TooManyCells {
        /// The configured cells per side.
        cells_per_side: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `domain_width` is NaN, infinite, zero, or negative.
    InvalidDomainWidth {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCells => write!(f, "grid must have at least one cell per side"),
            Self::TooManyCells {
                cells_per_side,
                max,
            } => {
                write!(f, "cells_per_side {cells_per_side} exceeds maximum of {max}")
            }
            Self::InvalidDomainWidth { value } => {
                write!(f, "domain_width must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by [`ListGrid2D`](crate::ListGrid2D) operations.
///
/// Every failing operation leaves the grid exactly as it was before the
/// call.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The grid configuration is invalid.
    Config(ConfigError),
    /// A coordinate is NaN or infinite.
    NonFiniteCoord {
        /// The offending point.
        point: Point2D,
    },
    /// A coordinate lies outside `[0, domain_width]` and the grid's
    /// [`EdgeBehavior`](crate::EdgeBehavior) is `Reject`.
    CoordOutOfDomain {
        /// The offending point.
        point: Point2D,
        /// Width of the square domain.
        domain_width: f64,
    },
    /// A [`PointId`] that was never issued by this grid.
    PointOutOfRange {
        /// The unknown id.
        id: PointId,
        /// Number of records in the arena.
        arena_len: usize,
    },
    /// A [`PointId`] whose record has already been removed.
    PointRemoved {
        /// The removed id.
        id: PointId,
    },
    /// A [`CellId`] outside the grid.
    CellOutOfRange {
        /// The unknown cell.
        cell: CellId,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// The arena cannot hold the requested number of additional records.
    CapacityExceeded {
        /// Arena length after the requested insert.
        requested: usize,
        /// Largest arena length the index type can address.
        capacity: usize,
    },
    /// A structural invariant does not hold (reported by `verify()`).
    Corrupted {
        /// Which invariant failed, and where.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::NonFiniteCoord { point } => {
                write!(f, "coordinate {point} is not finite")
            }
            Self::CoordOutOfDomain {
                point,
                domain_width,
            } => {
                write!(f, "coordinate {point} out of domain [0, {domain_width}]²")
            }
            Self::PointOutOfRange { id, arena_len } => {
                write!(f, "point {id} out of range: arena holds {arena_len} records")
            }
            Self::PointRemoved { id } => write!(f, "point {id} has been removed"),
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell {cell} out of range: grid has {cell_count} cells")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} records, capacity {capacity}"
                )
            }
            Self::Corrupted { reason } => write!(f, "grid corrupted: {reason}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
