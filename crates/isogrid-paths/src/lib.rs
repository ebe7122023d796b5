//! Pathfinding for tile-based movement.
//!
//! The centrepiece is [`Pathfinder`], a bounded-length A* search over any
//! [`Walkable`] map:
//!
//! - four-directional, unit-cost movement with the [`manhattan`] heuristic;
//! - a blocked goal is replaced by the nearest walkable tile found by
//!   scanning square rings around it ([`closest_walkable`]);
//! - results are capped at a caller-supplied length, keeping the tiles
//!   nearest the goal.
//!
//! Searches are deterministic: neighbours are expanded in a fixed order
//! ([`EXPANSION_ORDER`]) and equal-priority nodes leave the frontier in
//! insertion order.
//!
//! [`PathFollower`] consumes a finished path one step at a time,
//! re-checking each tile before the agent moves onto it.
//!
//! ```
//! use isogrid_core::{Point, WalkGrid};
//! use isogrid_paths::Pathfinder;
//!
//! let map = WalkGrid::filled(5, 5, true);
//! let path = Pathfinder::new(&map).find_path(Point::new(0, 0), Point::new(4, 4), 30);
//! assert_eq!(path.len(), 9);
//! assert_eq!(path.last(), Some(&Point::new(4, 4)));
//! ```

mod astar;
mod config;
mod distance;
mod follow;
mod neighbors;
mod node;
mod ring;
mod traits;

pub use astar::Pathfinder;
pub use config::{
    ClosedSetPolicy, DEFAULT_GOAL_SEARCH_RADIUS, DEFAULT_MAX_PATH_LEN, PathfinderConfig,
};
pub use distance::{chebyshev, manhattan};
pub use follow::{PathFollower, Step, strip_start};
pub use neighbors::{EXPANSION_ORDER, Neighbors};
pub use ring::{closest_walkable, ring};
pub use traits::{Passable, Walkable};
