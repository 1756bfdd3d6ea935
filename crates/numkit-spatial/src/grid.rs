//! The 2D binning grid.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geometry::GridGeometry;
use crate::iter::CellIter;
use crate::list::{CellLists, ListPoint2D, LIST_NIL};
use numkit_core::{CellId, Point2D, PointId, PointRange};
use tracing::{debug, trace};

/// A uniform grid over `[0, domain_width]²` that bins points into cells.
///
/// Each cell owns an intrusive doubly linked list of the points currently
/// inside it. Point records live in a flat, append-only arena and are
/// addressed by [`PointId`], so ids stay valid as the arena grows.
///
/// - [`insert`](Self::insert) appends a batch and links every point into
///   its cell.
/// - [`relocate`](Self::relocate) moves a point, relinking it if it
///   changes cell. It never allocates.
/// - [`remove`](Self::remove) unlinks a point for good. Its slot is not
///   reused.
/// - [`cell_members`](Self::cell_members) / [`iter_cell`](Self::iter_cell)
///   list a cell's points, most recently linked first.
///
/// # Examples
///
/// ```
/// use numkit_core::{CellId, Point2D, PointId};
/// use numkit_spatial::ListGrid2D;
///
/// let mut grid = ListGrid2D::with_dims(3, 9.0).unwrap();
/// let ids = grid
///     .insert(&[Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0), Point2D::new(4.0, 4.0)])
///     .unwrap();
/// assert_eq!(ids.len(), 3);
/// assert_eq!(grid.cell_members(CellId(0)).unwrap(), vec![PointId(1), PointId(0)]);
///
/// grid.relocate(PointId(1), Point2D::new(4.5, 3.5)).unwrap();
/// assert_eq!(grid.cell_members(CellId(4)).unwrap(), vec![PointId(1), PointId(2)]);
///
/// grid.remove(PointId(0)).unwrap();
/// assert!(grid.cell_members(CellId(0)).unwrap().is_empty());
/// assert_eq!(grid.live_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ListGrid2D {
    pub(crate) config: GridConfig,
    pub(crate) geometry: GridGeometry,
    pub(crate) points: Vec<ListPoint2D>,
    pub(crate) lists: CellLists,
    pub(crate) live: usize,
    /// Arena length limit; [`MAX_POINTS`](Self::MAX_POINTS) outside tests.
    pub(crate) max_points: usize,
}

impl ListGrid2D {
    /// Largest arena length: every id must stay below [`LIST_NIL`].
    pub const MAX_POINTS: usize = LIST_NIL as usize;

    /// Create an empty grid.
    ///
    /// Returns `Err(GridError::Config(_))` if the config fails
    /// [`GridConfig::validate`].
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let geometry = GridGeometry::new(&config).inspect_err(|e| {
            debug!(error = %e, "rejected grid config");
        })?;
        debug!(
            cells_per_side = config.cells_per_side,
            domain_width = config.domain_width,
            edge = ?config.edge,
            "created grid"
        );
        Ok(Self {
            lists: CellLists::new(geometry.cell_count()),
            points: Vec::with_capacity(config.capacity_hint),
            geometry,
            config,
            live: 0,
            max_points: Self::MAX_POINTS,
        })
    }

    /// Create an empty grid that rejects out-of-domain points.
    pub fn with_dims(cells_per_side: u32, domain_width: f64) -> Result<Self, GridError> {
        Self::new(GridConfig::new(cells_per_side, domain_width))
    }

    /// The config this grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Cell mapping for this grid.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Number of cells, `cells_per_side²`.
    pub fn cell_count(&self) -> usize {
        self.geometry.cell_count()
    }

    /// Number of records ever inserted, live or removed.
    pub fn arena_len(&self) -> usize {
        self.points.len()
    }

    /// Number of records currently linked into a cell.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Number of removed records still occupying arena slots.
    pub fn removed_count(&self) -> usize {
        self.points.len() - self.live
    }

    /// Whether no point is currently linked into any cell.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Append a batch of points and link each into its cell.
    ///
    /// The i-th point receives `PointId(arena_len + i)`; the returned range
    /// covers the whole batch. The batch is atomic: if any point is
    /// rejected, nothing is inserted.
    pub fn insert(&mut self, batch: &[Point2D]) -> Result<PointRange, GridError> {
        let start = self.points.len();
        let end = start + batch.len();
        if end > self.max_points {
            debug!(requested = end, "insert exceeds arena capacity");
            return Err(GridError::CapacityExceeded {
                requested: end,
                capacity: self.max_points,
            });
        }
        let cells = batch
            .iter()
            .map(|&point| {
                self.geometry.cell_of(point).inspect_err(|e| {
                    debug!(%point, error = %e, "insert rejected");
                })
            })
            .collect::<Result<Vec<CellId>, GridError>>()?;

        self.points.reserve(batch.len());
        for (i, (&point, cell)) in batch.iter().zip(cells).enumerate() {
            let idx = (start + i) as u32;
            self.points.push(ListPoint2D::unlinked(point));
            self.lists.link(&mut self.points, idx, cell);
        }
        self.live += batch.len();
        trace!(start, count = batch.len(), "inserted batch");
        Ok(PointRange::new(start as u32, end as u32))
    }

    /// Insert a single point.
    pub fn insert_one(&mut self, point: Point2D) -> Result<PointId, GridError> {
        let range = self.insert(std::slice::from_ref(&point))?;
        Ok(range.start())
    }

    /// Move a live point to `point`, keeping its id.
    ///
    /// The record is unlinked from the cell of its old position and pushed
    /// onto the front of the cell of its new one, even when both are the
    /// same cell. On error the point stays where it was.
    pub fn relocate(&mut self, id: PointId, point: Point2D) -> Result<(), GridError> {
        self.check_live(id)?;
        let new_cell = self.geometry.cell_of(point).inspect_err(|e| {
            debug!(%id, %point, error = %e, "relocate rejected");
        })?;
        let old_cell = self.geometry.cell_of(self.points[id.index()].point())?;

        self.lists.unlink(&mut self.points, id.0, old_cell);
        self.points[id.index()].set_point(point);
        self.lists.link(&mut self.points, id.0, new_cell);

        if old_cell != new_cell {
            trace!(%id, from = %old_cell, to = %new_cell, "point changed cell");
        }
        Ok(())
    }

    /// Unlink a live point from its cell.
    ///
    /// The id stays allocated and is never handed out again; any later
    /// operation on it fails with [`GridError::PointRemoved`].
    pub fn remove(&mut self, id: PointId) -> Result<(), GridError> {
        self.check_live(id)?;
        let cell = self.geometry.cell_of(self.points[id.index()].point())?;
        self.lists.unlink(&mut self.points, id.0, cell);
        self.live -= 1;
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Ids of every point in `cell`, head to tail.
    ///
    /// Allocates one `Vec` sized to the cell's population.
    pub fn cell_members(&self, cell: CellId) -> Result<Vec<PointId>, GridError> {
        let iter = self.iter_cell(cell)?;
        let mut out = Vec::with_capacity(iter.len());
        out.extend(iter);
        Ok(out)
    }

    /// Iterate the ids in `cell` without allocating.
    pub fn iter_cell(&self, cell: CellId) -> Result<CellIter<'_>, GridError> {
        self.geometry.check_cell(cell)?;
        Ok(self.cell_iter_unchecked(cell))
    }

    /// Iterate every cell in [`CellId`] order, paired with its members.
    ///
    /// `CellId` order walks `y` fastest, which follows memory layout.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellId, CellIter<'_>)> + '_ {
        (0..self.cell_count() as u32).map(move |c| {
            let cell = CellId(c);
            (cell, self.cell_iter_unchecked(cell))
        })
    }

    /// First point in `cell`'s list, if any.
    pub fn head(&self, cell: CellId) -> Result<Option<PointId>, GridError> {
        self.geometry.check_cell(cell)?;
        Ok(self.lists.head(cell))
    }

    /// Number of points currently in `cell`.
    pub fn population(&self, cell: CellId) -> Result<u32, GridError> {
        self.geometry.check_cell(cell)?;
        Ok(self.lists.size(cell))
    }

    /// Population of every cell, indexed by [`CellId`].
    pub fn populations(&self) -> &[u32] {
        self.lists.sizes()
    }

    /// The record behind `id`, live or removed.
    pub fn point(&self, id: PointId) -> Result<&ListPoint2D, GridError> {
        self.points
            .get(id.index())
            .ok_or(GridError::PointOutOfRange {
                id,
                arena_len: self.points.len(),
            })
    }

    /// Current position of `id`.
    pub fn position(&self, id: PointId) -> Result<Point2D, GridError> {
        self.point(id).map(ListPoint2D::point)
    }

    /// The cell a live point is linked into.
    pub fn cell_of_point(&self, id: PointId) -> Result<CellId, GridError> {
        self.check_live(id)?;
        self.geometry.cell_of(self.points[id.index()].point())
    }

    /// The whole arena, indexed by [`PointId`].
    pub fn points(&self) -> &[ListPoint2D] {
        &self.points
    }

    // ── Internals ───────────────────────────────────────────────

    fn check_live(&self, id: PointId) -> Result<(), GridError> {
        if !self.point(id)?.is_live() {
            debug!(%id, "operation on removed point");
            return Err(GridError::PointRemoved { id });
        }
        Ok(())
    }

    fn cell_iter_unchecked(&self, cell: CellId) -> CellIter<'_> {
        CellIter::new(&self.points, self.lists.head_link(cell), self.lists.size(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::edge::EdgeBehavior;
    use crate::error::ConfigError;
    use numkit_test_utils::reference::{
        reference_points, REFERENCE_CELLS_PER_SIDE, REFERENCE_DOMAIN_WIDTH,
    };
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    fn ids(v: &[u32]) -> Vec<PointId> {
        v.iter().copied().map(PointId).collect()
    }

    fn reference_grid() -> ListGrid2D {
        let mut g =
            ListGrid2D::with_dims(REFERENCE_CELLS_PER_SIDE, REFERENCE_DOMAIN_WIDTH).unwrap();
        g.insert(&reference_points()).unwrap();
        g
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_grid_is_empty() {
        let g = ListGrid2D::with_dims(4, 2.0).unwrap();
        assert_eq!(g.cell_count(), 16);
        assert_eq!(g.arena_len(), 0);
        assert!(g.is_empty());
        assert!(g.populations().iter().all(|&s| s == 0));
        for c in 0..16 {
            assert_eq!(g.head(CellId(c)).unwrap(), None);
        }
        assert_eq!(g.geometry().cell_width(), 0.5);
    }

    #[test]
    fn new_rejects_bad_config() {
        assert_eq!(
            ListGrid2D::with_dims(0, 1.0).unwrap_err(),
            GridError::Config(ConfigError::ZeroCells)
        );
        assert!(matches!(
            ListGrid2D::with_dims(3, -9.0),
            Err(GridError::Config(ConfigError::InvalidDomainWidth { .. }))
        ));
    }

    #[test]
    fn capacity_hint_reserves_arena() {
        let g = ListGrid2D::new(GridConfig::new(2, 1.0).with_capacity(64)).unwrap();
        assert!(g.points.capacity() >= 64);
    }

    // ── Insert ──────────────────────────────────────────────────

    #[test]
    fn insert_populations_table() {
        let cases: [(&[Point2D], [u32; 9]); 4] = [
            (&[p(0.0, 0.0)], [1, 0, 0, 0, 0, 0, 0, 0, 0]),
            (&[p(0.0, 0.0), p(1.0, 1.0)], [2, 0, 0, 0, 0, 0, 0, 0, 0]),
            (
                &[p(0.0, 0.0), p(3.0, 3.0), p(6.0, 6.0)],
                [1, 0, 0, 0, 1, 0, 0, 0, 1],
            ),
            (
                &[p(0.0, 0.0), p(2.0, 2.0), p(3.0, 3.0), p(6.0, 6.0), p(1.0, 1.0), p(3.0, 0.0)],
                [3, 0, 0, 1, 1, 0, 0, 0, 1],
            ),
        ];
        for (i, (pts, want)) in cases.iter().enumerate() {
            let mut g = ListGrid2D::with_dims(3, 9.0).unwrap();
            g.insert(pts).unwrap();
            assert_eq!(g.populations(), want, "case {i}");
            compliance::assert_consistent(&g);
        }
    }

    #[test]
    fn reference_populations_and_members() {
        let g = reference_grid();
        assert_eq!(g.populations(), &[3, 0, 0, 2, 1, 0, 0, 0, 0]);
        assert_eq!(g.cell_members(CellId(0)).unwrap(), ids(&[4, 1, 0]));
        assert_eq!(g.cell_members(CellId(1)).unwrap(), ids(&[]));
        assert_eq!(g.cell_members(CellId(3)).unwrap(), ids(&[5, 3]));
        assert_eq!(g.cell_members(CellId(4)).unwrap(), ids(&[2]));
        compliance::assert_consistent(&g);
    }

    #[test]
    fn reference_heads() {
        let g = reference_grid();
        let cases = [(0, Some(4)), (1, None), (3, Some(5)), (4, Some(2))];
        for (cell, want) in cases {
            assert_eq!(g.head(CellId(cell)).unwrap(), want.map(PointId), "cell {cell}");
        }
    }

    #[test]
    fn reference_head_and_tail_flags() {
        let g = reference_grid();
        let tails = [true, false, true, true, false, false];
        let heads = [false, false, true, false, true, true];
        for i in 0..6 {
            let rec = g.point(PointId(i)).unwrap();
            assert_eq!(rec.is_tail(), tails[i as usize], "is_tail({i})");
            assert_eq!(rec.is_head(), heads[i as usize], "is_head({i})");
        }
    }

    #[test]
    fn reference_links() {
        let g = reference_grid();
        let prev = [Some(1), Some(4), None, Some(5), None, None];
        let next = [None, Some(0), None, None, Some(1), Some(3)];
        for i in 0..6u32 {
            let rec = g.point(PointId(i)).unwrap();
            assert_eq!(rec.prev(), prev[i as usize].map(PointId), "prev({i})");
            assert_eq!(rec.next(), next[i as usize].map(PointId), "next({i})");
        }
    }

    #[test]
    fn insert_returns_stable_range_across_batches() {
        let mut g = ListGrid2D::with_dims(3, 9.0).unwrap();
        let a = g.insert(&[p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
        let b = g.insert(&[p(8.0, 8.0)]).unwrap();
        assert_eq!(a, PointRange::new(0, 2));
        assert_eq!(b, PointRange::new(2, 3));
        assert_eq!(g.position(PointId(0)).unwrap(), p(0.0, 0.0));
        assert_eq!(g.position(PointId(2)).unwrap(), p(8.0, 8.0));
        assert_eq!(g.insert_one(p(4.0, 4.0)).unwrap(), PointId(3));
    }

    #[test]
    fn empty_batch_is_noop() {
        let mut g = ListGrid2D::with_dims(3, 9.0).unwrap();
        let r = g.insert(&[]).unwrap();
        assert!(r.is_empty());
        assert_eq!(g.arena_len(), 0);
    }

    #[test]
    fn rejected_batch_leaves_grid_untouched() {
        let mut g = reference_grid();
        let before = g.clone();
        let err = g
            .insert(&[p(1.0, 1.0), p(9.5, 0.0), p(2.0, 2.0)])
            .unwrap_err();
        assert!(matches!(err, GridError::CoordOutOfDomain { .. }));
        assert_eq!(g.arena_len(), before.arena_len());
        assert_eq!(g.populations(), before.populations());
        assert_eq!(g.points(), before.points());
    }

    #[test]
    fn insert_past_capacity_leaves_grid_untouched() {
        let mut g = reference_grid();
        g.max_points = 7;
        let before = g.clone();
        assert_eq!(
            g.insert(&[p(1.0, 1.0), p(2.0, 2.0)]),
            Err(GridError::CapacityExceeded {
                requested: 8,
                capacity: 7
            })
        );
        assert_eq!(g.points(), before.points());
        assert_eq!(g.populations(), before.populations());
        assert_eq!(g.live_count(), 6);

        assert_eq!(g.insert_one(p(2.0, 2.0)).unwrap(), PointId(6));
        assert!(matches!(
            g.insert_one(p(2.0, 2.0)),
            Err(GridError::CapacityExceeded { .. })
        ));
        compliance::assert_consistent(&g);
    }

    #[test]
    fn new_grid_allows_full_id_space() {
        let g = ListGrid2D::with_dims(2, 1.0).unwrap();
        assert_eq!(g.max_points, ListGrid2D::MAX_POINTS);
        assert_eq!(ListGrid2D::MAX_POINTS, LIST_NIL as usize);
    }

    #[test]
    fn insert_rejects_non_finite() {
        let mut g = ListGrid2D::with_dims(3, 9.0).unwrap();
        assert!(matches!(
            g.insert(&[p(f64::NAN, 0.0)]),
            Err(GridError::NonFiniteCoord { .. })
        ));
        assert!(g.is_empty());
    }

    #[test]
    fn clamp_and_wrap_bin_out_of_domain_points() {
        let mut clamp =
            ListGrid2D::new(GridConfig::new(3, 9.0).with_edge(EdgeBehavior::Clamp)).unwrap();
        clamp.insert(&[p(-4.0, 20.0)]).unwrap();
        assert_eq!(clamp.cell_members(CellId(2)).unwrap(), ids(&[0]));
        assert_eq!(clamp.position(PointId(0)).unwrap(), p(-4.0, 20.0));

        let mut wrap =
            ListGrid2D::new(GridConfig::new(3, 9.0).with_edge(EdgeBehavior::Wrap)).unwrap();
        wrap.insert(&[p(-4.0, 20.0)]).unwrap();
        // x: floor(-4/3) = -2 -> 1; y: floor(20/3) = 6 -> 0
        assert_eq!(wrap.cell_members(CellId(3)).unwrap(), ids(&[0]));
        compliance::assert_consistent(&wrap);
    }

    // ── Remove ──────────────────────────────────────────────────

    #[test]
    fn remove_table() {
        let cases: [(u32, u32, &[u32]); 6] = [
            (0, 0, &[4, 1]),
            (1, 0, &[4, 0]),
            (2, 4, &[]),
            (3, 3, &[5]),
            (4, 0, &[1, 0]),
            (5, 3, &[3]),
        ];
        for (id, cell, want) in cases {
            let mut g = reference_grid();
            g.remove(PointId(id)).unwrap();
            assert_eq!(g.cell_members(CellId(cell)).unwrap(), ids(want), "remove {id}");
            assert_eq!(g.live_count(), 5);
            assert_eq!(g.removed_count(), 1);
            compliance::assert_consistent(&g);
        }
    }

    #[test]
    fn remove_head_updates_population() {
        let mut g = reference_grid();
        g.remove(PointId(4)).unwrap();
        assert_eq!(g.population(CellId(0)).unwrap(), 2);
        assert_eq!(g.head(CellId(0)).unwrap(), Some(PointId(1)));
        assert!(g.point(PointId(1)).unwrap().is_head());
    }

    #[test]
    fn double_remove_is_rejected() {
        let mut g = reference_grid();
        g.remove(PointId(1)).unwrap();
        assert_eq!(
            g.remove(PointId(1)),
            Err(GridError::PointRemoved { id: PointId(1) })
        );
        assert_eq!(g.population(CellId(0)).unwrap(), 2);
        compliance::assert_consistent(&g);
    }

    #[test]
    fn removed_point_stays_out_of_every_cell() {
        let mut g = reference_grid();
        g.remove(PointId(2)).unwrap();
        g.insert(&[p(4.0, 4.0), p(5.0, 5.0)]).unwrap();
        g.relocate(PointId(0), p(4.5, 4.5)).unwrap();
        for (_, members) in g.iter_cells() {
            assert!(members.into_iter().all(|id| id != PointId(2)));
        }
        assert!(!g.point(PointId(2)).unwrap().is_live());
        assert_eq!(
            g.cell_of_point(PointId(2)),
            Err(GridError::PointRemoved { id: PointId(2) })
        );
    }

    // ── Relocate ────────────────────────────────────────────────

    #[test]
    fn relocate_table() {
        struct Case {
            id: u32,
            to: Point2D,
            source: (u32, &'static [u32]),
            target: (u32, &'static [u32]),
        }
        let cases = [
            Case { id: 0, to: p(1.0, 1.0), source: (0, &[0, 4, 1]), target: (0, &[0, 4, 1]) },
            Case { id: 1, to: p(4.0, 4.0), source: (0, &[4, 0]), target: (4, &[1, 2]) },
            Case { id: 1, to: p(8.0, 8.0), source: (0, &[4, 0]), target: (8, &[1]) },
            Case { id: 2, to: p(4.0, 4.0), source: (4, &[2]), target: (4, &[2]) },
            Case { id: 2, to: p(8.0, 8.0), source: (4, &[]), target: (8, &[2]) },
        ];
        for (i, c) in cases.iter().enumerate() {
            let mut g = reference_grid();
            g.relocate(PointId(c.id), c.to).unwrap();
            assert_eq!(
                g.cell_members(CellId(c.source.0)).unwrap(),
                ids(c.source.1),
                "case {i}: source"
            );
            assert_eq!(
                g.cell_members(CellId(c.target.0)).unwrap(),
                ids(c.target.1),
                "case {i}: target"
            );
            assert_eq!(g.position(PointId(c.id)).unwrap(), c.to);
            compliance::assert_consistent(&g);
        }
    }

    #[test]
    fn relocate_out_of_domain_keeps_point() {
        let mut g = reference_grid();
        let err = g.relocate(PointId(1), p(-1.0, 4.0)).unwrap_err();
        assert!(matches!(err, GridError::CoordOutOfDomain { .. }));
        assert_eq!(g.position(PointId(1)).unwrap(), p(2.0, 2.0));
        assert_eq!(g.cell_members(CellId(0)).unwrap(), ids(&[4, 1, 0]));
    }

    #[test]
    fn relocate_removed_or_unknown_is_rejected() {
        let mut g = reference_grid();
        g.remove(PointId(3)).unwrap();
        assert_eq!(
            g.relocate(PointId(3), p(1.0, 1.0)),
            Err(GridError::PointRemoved { id: PointId(3) })
        );
        assert_eq!(
            g.relocate(PointId(6), p(1.0, 1.0)),
            Err(GridError::PointOutOfRange {
                id: PointId(6),
                arena_len: 6
            })
        );
    }

    #[test]
    fn relocate_under_wrap_follows_periodic_image() {
        let mut g =
            ListGrid2D::new(GridConfig::new(3, 9.0).with_edge(EdgeBehavior::Wrap)).unwrap();
        g.insert(&[p(8.5, 8.5)]).unwrap();
        g.relocate(PointId(0), p(9.5, 8.5)).unwrap();
        assert_eq!(g.cell_of_point(PointId(0)).unwrap(), CellId(2));
        compliance::assert_consistent(&g);
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn unknown_cell_is_rejected() {
        let g = reference_grid();
        let err = GridError::CellOutOfRange {
            cell: CellId(9),
            cell_count: 9,
        };
        assert_eq!(g.cell_members(CellId(9)).unwrap_err(), err);
        assert_eq!(g.population(CellId(9)).unwrap_err(), err);
        assert_eq!(g.head(CellId(9)).unwrap_err(), err);
        assert!(g.iter_cell(CellId(9)).is_err());
    }

    #[test]
    fn iter_cell_matches_cell_members() {
        let g = reference_grid();
        for c in 0..9 {
            let iter = g.iter_cell(CellId(c)).unwrap();
            assert_eq!(iter.len(), g.population(CellId(c)).unwrap() as usize);
            let collected: Vec<PointId> = iter.collect();
            assert_eq!(collected, g.cell_members(CellId(c)).unwrap());
        }
    }

    #[test]
    fn iter_cells_visits_every_live_point_once() {
        let g = reference_grid();
        let mut all: Vec<PointId> = g.iter_cells().flat_map(|(_, it)| it).collect();
        all.sort();
        assert_eq!(all, ids(&[0, 1, 2, 3, 4, 5]));
        let order: Vec<CellId> = g.iter_cells().map(|(c, _)| c).collect();
        assert_eq!(order, (0..9).map(CellId).collect::<Vec<_>>());
    }

    #[test]
    fn cell_of_point_matches_geometry() {
        let g = reference_grid();
        for (i, pt) in reference_points().iter().enumerate() {
            let id = PointId(i as u32);
            assert_eq!(g.cell_of_point(id).unwrap(), g.geometry().cell_of(*pt).unwrap());
        }
    }

    // ── Property tests ──────────────────────────────────────────

    #[derive(Clone, Debug)]
    enum Op {
        Insert(Vec<(f64, f64)>),
        Relocate(usize, (f64, f64)),
        Remove(usize),
    }

    fn arb_point() -> impl Strategy<Value = (f64, f64)> {
        (-2.0f64..12.0, -2.0f64..12.0)
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            proptest::collection::vec(arb_point(), 0..6).prop_map(Op::Insert),
            (0usize..64, arb_point()).prop_map(|(i, pt)| Op::Relocate(i, pt)),
            (0usize..64).prop_map(Op::Remove),
        ]
    }

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![
            Just(EdgeBehavior::Reject),
            Just(EdgeBehavior::Clamp),
            Just(EdgeBehavior::Wrap),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_under_random_ops(
            n in 1u32..6,
            edge in arb_edge(),
            ops in proptest::collection::vec(arb_op(), 1..40),
        ) {
            let mut g = ListGrid2D::new(GridConfig::new(n, 10.0).with_edge(edge)).unwrap();
            let mut removed = std::collections::HashSet::new();
            for op in ops {
                match op {
                    Op::Insert(pts) => {
                        let pts: Vec<Point2D> = pts.into_iter().map(Point2D::from).collect();
                        if let Ok(range) = g.insert(&pts) {
                            for (i, id) in range.iter().enumerate() {
                                let cell = g.geometry().cell_of(pts[i]).unwrap();
                                prop_assert!(g.iter_cell(cell).unwrap().any(|m| m == id));
                            }
                        }
                    }
                    Op::Relocate(i, pt) => {
                        let id = PointId(i as u32);
                        let to = Point2D::from(pt);
                        let old = g.cell_of_point(id).ok();
                        if g.relocate(id, to).is_ok() {
                            let new = g.cell_of_point(id).unwrap();
                            prop_assert!(g.iter_cell(new).unwrap().any(|m| m == id));
                            if let Some(old) = old.filter(|&c| c != new) {
                                prop_assert!(g.iter_cell(old).unwrap().all(|m| m != id));
                            }
                        }
                    }
                    Op::Remove(i) => {
                        let id = PointId(i as u32);
                        if g.remove(id).is_ok() {
                            prop_assert!(removed.insert(id));
                        }
                    }
                }
                let total: u64 = g.populations().iter().map(|&s| s as u64).sum();
                prop_assert_eq!(total as usize, g.live_count());
                prop_assert_eq!(g.live_count() + removed.len(), g.arena_len());
                for id in &removed {
                    for (_, mut members) in g.iter_cells() {
                        prop_assert!(members.all(|m| m != *id));
                    }
                }
                prop_assert!(g.verify().is_ok());
            }
        }
    }
}
