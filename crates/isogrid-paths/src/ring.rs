//! Nearest-walkable-tile lookup by expanding square rings.

use isogrid_core::Point;

use crate::traits::Walkable;

/// Iterate over the perimeter of the square of radius `radius` around
/// `center`, in row-major order.
///
/// The top and bottom rows are visited in full; each middle row contributes
/// only its left and right edge. Radius 0 yields `center` alone and a
/// negative radius yields nothing.
pub fn ring(center: Point, radius: i32) -> impl Iterator<Item = Point> {
    (radius.saturating_neg()..=radius).flat_map(move |dy| {
        let step = if dy.abs() == radius {
            1
        } else {
            2 * radius as usize
        };
        (radius.saturating_neg()..=radius)
            .step_by(step)
            .map(move |dx| center.shift(dx, dy))
    })
}

/// Find the walkable tile closest to `p`, scanning rings of radius
/// `1..=max_radius` in order.
///
/// `p` itself is not considered. Returns `None` when every ring up to
/// `max_radius` is fully blocked.
pub fn closest_walkable<W: Walkable>(oracle: &W, p: Point, max_radius: i32) -> Option<Point> {
    (1..=max_radius)
        .flat_map(|r| ring(p, r))
        .find(|&q| oracle.is_walkable(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;
    use crate::traits::Passable;

    #[test]
    fn ring_sizes() {
        let c = Point::new(3, -2);
        assert_eq!(ring(c, 0).collect::<Vec<_>>(), vec![c]);
        assert_eq!(ring(c, -1).count(), 0);
        assert_eq!(ring(c, i32::MIN).count(), 0);
        for r in 1..=6 {
            let pts: Vec<_> = ring(c, r).collect();
            assert_eq!(pts.len(), 8 * r as usize);
            assert!(pts.iter().all(|&p| chebyshev(c, p) == r));
        }
    }

    #[test]
    fn ring_is_row_major() {
        let pts: Vec<_> = ring(Point::ZERO, 1).collect();
        assert_eq!(
            pts,
            vec![
                Point::new(-1, -1),
                Point::new(0, -1),
                Point::new(1, -1),
                Point::new(-1, 0),
                Point::new(1, 0),
                Point::new(-1, 1),
                Point::new(0, 1),
                Point::new(1, 1),
            ]
        );
        let mut sorted = ring(Point::new(4, 4), 3).collect::<Vec<_>>();
        let scanned = sorted.clone();
        sorted.sort();
        assert_eq!(sorted, scanned);
    }

    #[test]
    fn closest_prefers_smaller_ring() {
        let goal = Point::new(10, 10);
        // Only the east neighbour in ring 1, plenty of tiles in ring 2.
        let oracle = Passable(move |p: Point| p == goal.shift(1, 0) || chebyshev(goal, p) == 2);
        assert_eq!(closest_walkable(&oracle, goal, 10), Some(goal.shift(1, 0)));
    }

    #[test]
    fn closest_uses_scan_order_within_ring() {
        let goal = Point::ZERO;
        let oracle = Passable(|p: Point| p == Point::new(1, 1) || p == Point::new(-1, 0));
        assert_eq!(closest_walkable(&oracle, goal, 1), Some(Point::new(-1, 0)));
    }

    #[test]
    fn closest_respects_radius_cap() {
        let goal = Point::ZERO;
        let oracle = Passable(|p: Point| chebyshev(Point::ZERO, p) == 11);
        assert_eq!(closest_walkable(&oracle, goal, 10), None);
        assert_eq!(closest_walkable(&oracle, goal, 11).map(|p| chebyshev(goal, p)), Some(11));
    }

    #[test]
    fn ring_wraps_at_coordinate_limits() {
        let corner = Point::new(i32::MAX, i32::MIN);
        let pts: Vec<_> = ring(corner, 1).collect();
        assert_eq!(pts.len(), 8);
        assert!(pts.contains(&Point::new(i32::MIN, i32::MIN)));
        assert!(pts.contains(&Point::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn closest_ignores_center() {
        let oracle = Passable(|p: Point| p == Point::ZERO);
        assert_eq!(closest_walkable(&oracle, Point::ZERO, 10), None);
    }
}
