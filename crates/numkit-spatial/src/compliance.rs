//! Grid consistency helpers shared by the test modules.
//!
//! These recompute every cell's membership from scratch and compare it to
//! what the intrusive lists report, on top of [`ListGrid2D::verify`].

use crate::grid::ListGrid2D;
use numkit_core::{CellId, PointId};

/// Assert that the grid's lists agree with a brute-force rebinning of all
/// live points.
pub fn assert_consistent(grid: &ListGrid2D) {
    if let Err(e) = grid.verify() {
        panic!("verify failed: {e}");
    }

    let mut expected: Vec<Vec<PointId>> = vec![Vec::new(); grid.cell_count()];
    for (i, rec) in grid.points().iter().enumerate() {
        if rec.is_live() {
            let cell = grid.geometry().cell_of(rec.point()).unwrap();
            expected[cell.index()].push(PointId(i as u32));
        }
    }

    for (c, want) in expected.iter_mut().enumerate() {
        let cell = CellId(c as u32);
        let mut got = grid.cell_members(cell).unwrap();
        assert_eq!(
            got.len(),
            grid.population(cell).unwrap() as usize,
            "cell {cell}: member count differs from population"
        );
        got.sort();
        want.sort();
        assert_eq!(&got, want, "cell {cell}: members differ from rebinning");
    }

    let live = grid.points().iter().filter(|r| r.is_live()).count();
    assert_eq!(live, grid.live_count(), "live flag count");
    assert_eq!(
        grid.populations().iter().map(|&s| s as usize).sum::<usize>(),
        live,
        "population sum"
    );
}
