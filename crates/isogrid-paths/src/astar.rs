use std::collections::HashMap;

use isogrid_core::Point;

use crate::config::{ClosedSetPolicy, PathfinderConfig};
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::node::{OpenSet, SearchNode};
use crate::ring::closest_walkable;
use crate::traits::Walkable;

/// Bounded-length A* search over a walkability oracle.
///
/// A `Pathfinder` holds no per-search state: every call to
/// [`find_path`](Self::find_path) allocates its own frontier and drops it
/// before returning, so one instance can serve many agents, including from
/// several threads when `W` is `Sync`.
#[derive(Debug, Clone)]
pub struct Pathfinder<W> {
    oracle: W,
    config: PathfinderConfig,
}

impl<W: Walkable> Pathfinder<W> {
    /// Create a pathfinder with the default configuration.
    pub fn new(oracle: W) -> Self {
        Self::with_config(oracle, PathfinderConfig::default())
    }

    /// Create a pathfinder with explicit settings.
    pub fn with_config(oracle: W, config: PathfinderConfig) -> Self {
        Self { oracle, config }
    }

    /// The settings this pathfinder searches with.
    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// The walkability oracle searches run against.
    pub fn oracle(&self) -> &W {
        &self.oracle
    }

    /// The tile a search toward `goal` actually aims for.
    ///
    /// A walkable goal is returned unchanged. Otherwise the closest walkable
    /// tile within `goal_search_radius` rings is used, and if there is none
    /// the blocked goal itself is returned.
    pub fn resolve_goal(&self, goal: Point) -> Point {
        if self.oracle.is_walkable(goal) {
            return goal;
        }
        match closest_walkable(&self.oracle, goal, self.config.goal_search_radius) {
            Some(p) => {
                log::debug!("goal {goal} is blocked, substituting {p}");
                p
            }
            None => {
                log::debug!(
                    "goal {goal} is blocked and nothing within {} tiles is walkable",
                    self.config.goal_search_radius
                );
                goal
            }
        }
    }

    /// Find a path of at most `max_len` tiles from `start` toward `goal`.
    ///
    /// The result starts at `start` and ends at the resolved goal (see
    /// [`resolve_goal`](Self::resolve_goal)); `start == goal` yields
    /// `[start]`. When the full path is longer than `max_len`, only the
    /// last `max_len` tiles (those nearest the goal) are kept. An empty
    /// vector means no route exists, or `max_len` is zero.
    ///
    /// `start` is taken as given and is not checked for walkability. Every
    /// other tile in the result is walkable.
    pub fn find_path(&self, start: Point, goal: Point, max_len: usize) -> Vec<Point> {
        let goal = self.resolve_goal(goal);

        let mut nodes = vec![SearchNode::new(start, None, 0, manhattan(start, goal))];
        let mut open = OpenSet::default();
        open.push(&nodes, 0);
        // Expanded tiles and the cost they were expanded at.
        let mut closed: HashMap<Point, i32> = HashMap::new();
        let mut nbrs = Neighbors::new();
        let mut expansions = 0usize;

        while let Some(ci) = open.pop(&nodes) {
            let current = nodes[ci];
            if current.pos == goal {
                log::trace!(
                    "path {start} -> {goal}: cost {} after {expansions} expansions",
                    current.g
                );
                return reconstruct(&nodes, ci, max_len);
            }
            if self.config.expansion_limit.is_some_and(|n| expansions >= n) {
                log::debug!(
                    "path {start} -> {goal}: gave up after {expansions} expansions ({} open)",
                    open.len()
                );
                return Vec::new();
            }
            expansions += 1;
            closed.insert(current.pos, current.g);

            let tentative = current.g + 1;
            let policy = self.config.closed_set;
            let candidates = nbrs.cardinal(current.pos, |n| {
                if !self.oracle.is_walkable(n) {
                    return false;
                }
                match (policy, closed.get(&n)) {
                    (_, None) => true,
                    (ClosedSetPolicy::Retire, Some(_)) => false,
                    (ClosedSetPolicy::Reopen, Some(&g)) => tentative < g,
                }
            });

            for &np in candidates {
                if open.get(np).is_some_and(|oi| tentative >= nodes[oi].g) {
                    continue;
                }
                // Clears a closed entry under `Reopen`; a no-op otherwise.
                closed.remove(&np);
                nodes.push(SearchNode::new(np, Some(ci), tentative, manhattan(np, goal)));
                open.push(&nodes, nodes.len() - 1);
            }
        }

        log::debug!("path {start} -> {goal}: unreachable after {expansions} expansions");
        Vec::new()
    }
}

/// Walk predecessors back from `end`, keeping at most `max_len` tiles.
fn reconstruct(nodes: &[SearchNode], end: usize, max_len: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(i) = cur {
        if path.len() >= max_len {
            break;
        }
        path.push(nodes[i].pos);
        cur = nodes[i].parent;
    }
    path.reverse();
    path
}
