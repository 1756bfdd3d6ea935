//! Grid configuration parameters.

use crate::edge::EdgeBehavior;
use crate::error::ConfigError;

/// Configuration for a [`ListGrid2D`](crate::ListGrid2D).
///
/// Validated at construction; all values are fixed for the grid's lifetime.
/// There is no reconfiguration operation.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of cells along each side of the square domain.
    ///
    /// Default: 50. Must be in `1..=MAX_CELLS_PER_SIDE`.
    pub cells_per_side: u32,

    /// Width of the square domain `[0, domain_width]²`.
    ///
    /// Default: 1.0. Must be finite and positive.
    pub domain_width: f64,

    /// Treatment of coordinates outside the domain. Default: `Reject`.
    pub edge: EdgeBehavior,

    /// Number of point records to reserve in the arena up front.
    ///
    /// Default: 0. Only affects allocation behavior, never semantics.
    pub capacity_hint: usize,
}

impl GridConfig {
    /// Default number of cells per side.
    pub const DEFAULT_CELLS_PER_SIDE: u32 = 50;

    /// Default domain width.
    pub const DEFAULT_DOMAIN_WIDTH: f64 = 1.0;

    /// Largest side length whose square still fits a `u32` cell index.
    pub const MAX_CELLS_PER_SIDE: u32 = u16::MAX as u32;

    /// Create a config with the given geometry and default edge behavior.
    pub fn new(cells_per_side: u32, domain_width: f64) -> Self {
        Self {
            cells_per_side,
            domain_width,
            edge: EdgeBehavior::default(),
            capacity_hint: 0,
        }
    }

    /// Replace the edge behavior.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Replace the arena capacity hint.
    pub fn with_capacity(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Total number of cells, `cells_per_side²`.
    pub fn cell_count(&self) -> usize {
        (self.cells_per_side as usize) * (self.cells_per_side as usize)
    }

    /// Width of a single cell.
    pub fn cell_width(&self) -> f64 {
        self.domain_width / self.cells_per_side as f64
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells_per_side == 0 {
            return Err(ConfigError::ZeroCells);
        }
        if self.cells_per_side > Self::MAX_CELLS_PER_SIDE {
            return Err(ConfigError::TooManyCells {
                cells_per_side: self.cells_per_side,
                max: Self::MAX_CELLS_PER_SIDE,
            });
        }
        if !self.domain_width.is_finite() || self.domain_width <= 0.0 {
            return Err(ConfigError::InvalidDomainWidth {
                value: self.domain_width,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELLS_PER_SIDE, Self::DEFAULT_DOMAIN_WIDTH)
    }
}
