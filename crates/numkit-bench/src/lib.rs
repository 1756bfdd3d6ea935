//! Benchmark profiles for the numkit spatial grid.
//!
//! Provides pre-built grid configurations for benchmarking and examples:
//!
//! - [`reference_profile`]: 50x50 cells over the unit square, 100K points
//! - [`cache_miss_profile`]: 1000x1000 cells, so consecutive inserts
//!   almost never touch the same cell list
//! - [`populated_grid`]: a grid pre-filled from a profile via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use numkit_core::PointRange;
use numkit_spatial::{GridConfig, GridError, ListGrid2D};
use numkit_test_utils::fixtures::uniform_points;

/// Grid shape plus the number of points a benchmark loads into it.
#[derive(Clone, Debug)]
pub struct BenchProfile {
    /// Grid configuration.
    pub config: GridConfig,
    /// Points inserted by [`populated_grid`].
    pub points: usize,
}

/// Reference profile: 50x50 cells over `[0, 1]²`, 100K points.
///
/// About 40 points per cell, the dense regime particle codes run in.
pub fn reference_profile() -> BenchProfile {
    BenchProfile {
        config: GridConfig::new(50, 1.0).with_capacity(100_000),
        points: 100_000,
    }
}

/// Sparse profile: 1000x1000 cells over `[0, 1]²`, 100K points.
///
/// Same point count as [`reference_profile`] but 400x the cells, so the
/// per-cell head and population arrays no longer fit in cache.
pub fn cache_miss_profile() -> BenchProfile {
    BenchProfile {
        config: GridConfig::new(1000, 1.0).with_capacity(100_000),
        points: 100_000,
    }
}

/// Build the grid for `profile` and insert its points, drawn uniformly
/// from the domain with `seed`.
pub fn populated_grid(
    profile: &BenchProfile,
    seed: u64,
) -> Result<(ListGrid2D, PointRange), GridError> {
    let mut grid = ListGrid2D::new(profile.config.clone())?;
    let points = uniform_points(profile.points, profile.config.domain_width, seed);
    let ids = grid.insert(&points)?;
    Ok((grid, ids))
}
