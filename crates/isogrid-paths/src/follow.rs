//! Consuming a path one step at a time.
//!
//! Paths are computed against the map as it was when the search ran. A
//! [`PathFollower`] re-checks each tile right before the agent steps onto
//! it, so a door that closed or an actor that moved in since then stops the
//! agent instead of walking it through a wall. Re-planning is up to the
//! caller.

use std::collections::VecDeque;

use isogrid_core::Point;

use crate::traits::Walkable;

/// Drop the leading tile of `path` if it is the agent's own tile.
///
/// A single-tile path is left alone, so a search whose goal is the start
/// still reports where the agent ends up.
pub fn strip_start(path: &mut Vec<Point>, start: Point) {
    if path.len() > 1 && path[0] == start {
        path.remove(0);
    }
}

/// Outcome of [`PathFollower::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The agent may move onto this tile; it has been consumed.
    Moved(Point),
    /// The next tile is no longer walkable. Nothing was consumed.
    Blocked(Point),
    /// No steps remain.
    Arrived,
}

/// Queue of tiles an agent still has to walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFollower {
    steps: VecDeque<Point>,
}

impl PathFollower {
    /// Build a follower for an agent standing on `start`.
    pub fn new(mut path: Vec<Point>, start: Point) -> Self {
        strip_start(&mut path, start);
        Self {
            steps: path.into(),
        }
    }

    /// The tile the next call to [`advance`](Self::advance) would move to.
    pub fn peek(&self) -> Option<Point> {
        self.steps.front().copied()
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    /// Abandon the rest of the path.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Try to take the next step, re-validating it against `oracle`.
    pub fn advance<W: Walkable>(&mut self, oracle: &W) -> Step {
        let Some(next) = self.peek() else {
            return Step::Arrived;
        };
        if !oracle.is_walkable(next) {
            log::debug!("next step {next} is blocked, {} steps left", self.steps.len());
            return Step::Blocked(next);
        }
        self.steps.pop_front();
        Step::Moved(next)
    }
}

impl Iterator for PathFollower {
    type Item = Point;

    /// Pop the next tile without re-validating it.
    fn next(&mut self) -> Option<Point> {
        self.steps.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.steps.len(), Some(self.steps.len()))
    }
}

impl ExactSizeIterator for PathFollower {}
