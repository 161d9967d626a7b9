use std::{fmt, str::FromStr};

use crate::{
    error::ParsePolicyError,
    models::{Grid, Position, SIDE},
};

/// How the search treats several neighbours that match the next letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Take the first matching neighbour and never revisit that choice.
    /// Fast, but a dead end down that branch fails the whole start cell even
    /// when a sibling neighbour would have completed the word.
    #[default]
    Committed,
    /// Backtrack through every matching neighbour before giving up on a cell.
    Exhaustive,
}

impl FromStr for SearchPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "committed" => Ok(Self::Committed),
            "exhaustive" => Ok(Self::Exhaustive),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

impl fmt::Display for SearchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Committed => f.write_str("committed"),
            Self::Exhaustive => f.write_str("exhaustive"),
        }
    }
}

/// Cells already on the current path
#[derive(Default)]
struct Visited([[bool; SIDE]; SIDE]);

impl Visited {
    fn contains(&self, pos: Position) -> bool {
        self.0[pos.row][pos.col]
    }

    fn set(&mut self, pos: Position, value: bool) {
        self.0[pos.row][pos.col] = value;
    }

    fn is_clear(&self) -> bool {
        self.0.iter().flatten().all(|used| !used)
    }
}

/// Depth-first search for a candidate word on a grid.
///
/// Start cells are tried in row-major order and neighbours in the order
/// NW, N, NE, W, E, SW, S, SE. The first complete path wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    policy: SearchPolicy,
}

impl PathFinder {
    pub fn new(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Check whether `candidate` can be traced on `grid`, ignoring case.
    pub fn is_traceable(&self, grid: &Grid, candidate: &str) -> bool {
        self.trace(grid, candidate).is_some()
    }

    /// Find the path spelling `candidate`, ignoring case.
    ///
    /// The empty candidate needs no cells and traces to an empty path.
    pub fn trace(&self, grid: &Grid, candidate: &str) -> Option<Vec<Position>> {
        let word: Vec<char> = candidate.to_uppercase().chars().collect();
        let Some(&first) = word.first() else {
            return Some(Vec::new());
        };

        let mut visited = Visited::default();
        let mut path = Vec::with_capacity(word.len());

        for start in Grid::interior_positions() {
            if !grid.tile(start).is_some_and(|tile| tile.matches(first)) {
                continue;
            }

            tracing::trace!("Tracing {:?} from {} ({})", candidate, start, self.policy);
            let found = self.extend(grid, &word, start, &mut visited, &mut path);
            debug_assert!(visited.is_clear(), "visited markers leaked out of a search");

            if found {
                return Some(path);
            }
        }

        None
    }

    /// Push `pos` onto the path and try to finish the word from there.
    ///
    /// `pos` must already match `word[path.len()]`. On failure the path is
    /// left as it was found; in every case `pos` is unmarked on return.
    fn extend(
        &self,
        grid: &Grid,
        word: &[char],
        pos: Position,
        visited: &mut Visited,
        path: &mut Vec<Position>,
    ) -> bool {
        path.push(pos);
        if path.len() == word.len() {
            return true;
        }

        visited.set(pos, true);
        let next = word[path.len()];
        let mut found = false;

        for neighbour in pos.neighbours() {
            if !neighbour.is_interior()
                || visited.contains(neighbour)
                || !grid.tile(neighbour).is_some_and(|tile| tile.matches(next))
            {
                continue;
            }

            found = self.extend(grid, word, neighbour, visited, path);
            if found || self.policy == SearchPolicy::Committed {
                break;
            }
        }

        visited.set(pos, false);
        if !found {
            path.pop();
        }
        found
    }
}

/// Whether `candidate` traces on `grid` under the committed-choice search.
pub fn is_traceable(grid: &Grid, candidate: &str) -> bool {
    PathFinder::default().is_traceable(grid, candidate)
}

/// The path [`is_traceable`] accepts, if any.
pub fn trace(grid: &Grid, candidate: &str) -> Option<Vec<Position>> {
    PathFinder::default().trace(grid, candidate)
}
