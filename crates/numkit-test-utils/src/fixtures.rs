//! Seeded point generators.
//!
//! All generators take an explicit seed and use [`ChaCha8Rng`], so a
//! failing test or a benchmark profile reproduces exactly across runs and
//! platforms.
//!
//! - [`uniform_points`]: independent uniform scatter over `[0, width)²`.
//! - [`RandomWalk`]: bounded per-step jitter around the previous position,
//!   the access pattern of particle simulations that relocate every point
//!   once per step.

use numkit_core::Point2D;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` points drawn uniformly from `[0, width)²`.
pub fn uniform_points(n: usize, width: f64, seed: u64) -> Vec<Point2D> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| uniform_point(&mut rng, width)).collect()
}

fn uniform_point(rng: &mut ChaCha8Rng, width: f64) -> Point2D {
    Point2D::new(rng.random::<f64>() * width, rng.random::<f64>() * width)
}

/// Deterministic random walk over a set of positions.
///
/// Each call to [`step`](RandomWalk::step) moves every position by at most
/// `max_step` per axis and reflects it back into `[0, width]`, returning
/// the new positions in id order.
pub struct RandomWalk {
    rng: ChaCha8Rng,
    positions: Vec<Point2D>,
    width: f64,
    max_step: f64,
}

impl RandomWalk {
    /// Start a walk from `positions`.
    pub fn new(positions: Vec<Point2D>, width: f64, max_step: f64, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            positions,
            width,
            max_step,
        }
    }

    /// Current positions, in id order.
    pub fn positions(&self) -> &[Point2D] {
        &self.positions
    }

    /// Advance every position by one step.
    pub fn step(&mut self) -> &[Point2D] {
        for p in &mut self.positions {
            let dx = self.rng.random_range(-self.max_step..=self.max_step);
            let dy = self.rng.random_range(-self.max_step..=self.max_step);
            p.x = reflect(p.x + dx, self.width);
            p.y = reflect(p.y + dy, self.width);
        }
        &self.positions
    }
}

fn reflect(v: f64, width: f64) -> f64 {
    if v < 0.0 {
        (-v).min(width)
    } else if v > width {
        (2.0 * width - v).max(0.0)
    } else {
        v
    }
}

/// `n` independent uniform targets, for relocation benchmarks that jump
/// points anywhere in the domain.
pub fn relocation_targets(n: usize, width: f64, seed: u64) -> Vec<Point2D> {
    uniform_points(n, width, seed.wrapping_add(0x9E37_79B9_7F4A_7C15))
}
