use isogrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the search heuristic: admissible and consistent for unit-cost
/// four-directional movement. Saturates at `i32::MAX` for points at
/// opposite ends of the coordinate space.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Chebyshev (L∞) distance between two points, i.e. the ring radius of `b`
/// around `a`.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).max(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}
