//! **isogrid-core** — tile-grid primitives shared by the *isogrid* crates.
//!
//! This crate provides the geometry types used to address map tiles and a
//! plain occupancy table, [`WalkGrid`], that can answer walkability queries
//! for the pathfinder in `isogrid-paths`.

pub mod geom;
pub mod walkgrid;

pub use geom::{Point, Range};
pub use walkgrid::{GridError, WalkGrid};
