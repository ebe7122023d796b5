use isogrid_core::Point;

/// Cardinal expansion order used by the search: +y, +x, −y, −x.
///
/// The order decides which of several equal-cost paths is returned, so it
/// is part of the observable behaviour.
pub const EXPANSION_ORDER: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// Reusable buffer for enumerating the cardinal neighbours of a tile.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(EXPANSION_ORDER.len()),
        }
    }

    /// Return the 4-directional neighbours of `p` in [`EXPANSION_ORDER`],
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in EXPANSION_ORDER {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
