//! Particle random walk over a binned grid.
//!
//! Scatters particles over the unit square, walks them for a number of
//! steps, removes a fraction along the way, and prints occupancy after
//! each phase.
//!
//! ```text
//! cargo run -p numkit-bench --example particle_walk
//! ```

use numkit_bench::populated_grid;
use numkit_bench::BenchProfile;
use numkit_spatial::{GridConfig, GridError};
use numkit_test_utils::fixtures::RandomWalk;

fn main() -> Result<(), GridError> {
    let profile = BenchProfile {
        config: GridConfig::new(32, 1.0),
        points: 20_000,
    };
    let (mut grid, ids) = populated_grid(&profile, 2024)?;
    println!("scattered: {}", grid.stats());

    let start = grid.points().iter().map(|r| r.point()).collect();
    let mut walk = RandomWalk::new(start, 1.0, 0.01, 2024);
    for step in 1..=100 {
        for (id, &p) in ids.iter().zip(walk.step()) {
            if grid.point(id)?.is_live() {
                grid.relocate(id, p)?;
            }
        }
        if step % 25 == 0 {
            for id in ids.iter().skip(step).step_by(10) {
                if grid.point(id)?.is_live() {
                    grid.remove(id)?;
                }
            }
            println!("step {step:>3}: {}", grid.stats());
        }
    }

    grid.verify()?;
    Ok(())
}
