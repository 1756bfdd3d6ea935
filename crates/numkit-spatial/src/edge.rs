//! Handling of coordinates that fall outside the grid's domain.

/// How a grid treats a coordinate outside `[0, domain_width]` on some axis.
///
/// The stored coordinate is never rewritten; `EdgeBehavior` only decides
/// which cell (if any) the point is binned into.
///
/// # Examples
///
/// ```
/// use numkit_core::{CellId, Point2D};
/// use numkit_spatial::{EdgeBehavior, GridConfig, ListGrid2D};
///
/// // Reject: out-of-domain points are an error.
/// let reject = ListGrid2D::new(GridConfig::new(4, 4.0)).unwrap();
/// assert!(reject.geometry().cell_of(Point2D::new(-0.5, 1.0)).is_err());
///
/// // Wrap: the domain is a torus.
/// let wrap = ListGrid2D::new(GridConfig::new(4, 4.0).with_edge(EdgeBehavior::Wrap)).unwrap();
/// assert_eq!(wrap.geometry().cell_of(Point2D::new(-0.5, 1.0)).unwrap(), CellId(13));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-domain coordinates are rejected with a range error.
    #[default]
    Reject,
    /// Out-of-domain coordinates are binned into the nearest boundary cell.
    Clamp,
    /// Out-of-domain coordinates wrap to the opposite side (periodic).
    Wrap,
}
