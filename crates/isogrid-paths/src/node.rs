use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use isogrid_core::Point;

// ---------------------------------------------------------------------------
// Search nodes
// ---------------------------------------------------------------------------

/// A tile discovered during one search, stored in a per-search arena.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    /// Arena index of the predecessor; `None` for the start node.
    pub(crate) parent: Option<usize>,
    pub(crate) g: i32,
    pub(crate) f: i32,
}

impl SearchNode {
    pub(crate) fn new(pos: Point, parent: Option<usize>, g: i32, h: i32) -> Self {
        Self {
            pos,
            parent,
            g,
            f: g.saturating_add(h),
        }
    }
}

/// Nodes are the same node when they sit on the same tile, whatever their
/// costs.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

/// Heap handle for an arena node, ordered by `f` then insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest inserted among equal f.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Open set
// ---------------------------------------------------------------------------

/// Frontier of the search: a priority heap plus a tile → live node map.
///
/// Replacing the node at a tile leaves the old heap handle in place; it is
/// discarded when popped because the map no longer points at it.
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<NodeRef>,
    live: HashMap<Point, usize>,
    seq: u64,
}

impl OpenSet {
    /// Insert `idx` as the live node for its tile, superseding any previous
    /// one.
    pub(crate) fn push(&mut self, nodes: &[SearchNode], idx: usize) {
        let node = &nodes[idx];
        self.live.insert(node.pos, idx);
        self.heap.push(NodeRef {
            idx,
            f: node.f,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// The live node at `p`, if the tile is open.
    pub(crate) fn get(&self, p: Point) -> Option<usize> {
        self.live.get(&p).copied()
    }

    /// Remove and return the live node with the smallest `f`.
    pub(crate) fn pop(&mut self, nodes: &[SearchNode]) -> Option<usize> {
        while let Some(r) = self.heap.pop() {
            let pos = nodes[r.idx].pos;
            if self.live.get(&pos) == Some(&r.idx) {
                self.live.remove(&pos);
                return Some(r.idx);
            }
        }
        None
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }
}
