use isogrid_core::{Point, WalkGrid};

/// Read-only walkability query over a tile map.
///
/// Implementations must answer `false` for coordinates outside the map
/// rather than panicking. The pathfinder may call this many times per
/// search and never mutates the underlying map.
pub trait Walkable {
    /// Whether an agent may stand on `p`.
    fn is_walkable(&self, p: Point) -> bool;
}

impl<T: Walkable + ?Sized> Walkable for &T {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }
}

impl Walkable for WalkGrid {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        WalkGrid::is_walkable(self, p)
    }
}

/// Adapter turning a predicate into a [`Walkable`].
///
/// ```
/// use isogrid_core::Point;
/// use isogrid_paths::{Passable, Walkable};
///
/// let open_quadrant = Passable(|p: Point| p.x >= 0 && p.y >= 0);
/// assert!(open_quadrant.is_walkable(Point::new(3, 4)));
/// assert!(!open_quadrant.is_walkable(Point::new(-1, 0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Passable<F>(pub F);

impl<F: Fn(Point) -> bool> Walkable for Passable<F> {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (self.0)(p)
    }
}
