//! Pathfinder settings.

/// Largest ring radius scanned when substituting a blocked goal.
pub const DEFAULT_GOAL_SEARCH_RADIUS: i32 = 10;

/// Path budget used for click-to-move requests.
pub const DEFAULT_MAX_PATH_LEN: usize = 30;

/// What happens when a cheaper route reaches an already expanded tile.
///
/// With unit step costs and the Manhattan heuristic this never happens: a
/// tile is always expanded at its optimal cost, so both policies return
/// identical paths. The choice only matters to code that builds on the
/// search with a different cost model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosedSetPolicy {
    /// Expanded tiles are retired for the rest of the search, even if a
    /// cheaper route to them turns up later. Only open entries are ever
    /// updated with a lower cost.
    #[default]
    Retire,
    /// Textbook A*: an expanded tile reached at a strictly lower cost is
    /// reopened and expanded again.
    Reopen,
}

/// Tunables for [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Ring radius cap for blocked-goal substitution. Zero disables it.
    pub goal_search_radius: i32,
    pub closed_set: ClosedSetPolicy,
    /// Give up after this many node expansions. `None` searches until the
    /// goal is reached or the reachable area is exhausted.
    pub expansion_limit: Option<usize>,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            goal_search_radius: DEFAULT_GOAL_SEARCH_RADIUS,
            closed_set: ClosedSetPolicy::Retire,
            expansion_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = PathfinderConfig::default();
        assert_eq!(cfg.goal_search_radius, 10);
        assert_eq!(cfg.closed_set, ClosedSetPolicy::Retire);
        assert_eq!(cfg.expansion_limit, None);
    }
}
