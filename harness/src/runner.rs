//! Thin solve runner: parse → world → search.
//!
//! The runner owns no domain or search logic. It is the seam a
//! command-line dispatcher would call with an input file's contents and
//! the variant's room depth.

use burrow_search::error::SearchError;
use burrow_search::policy::SearchPolicy;
use burrow_search::search::{uniform_cost, Solution};

use crate::worlds::burrow::{parse, BurrowWorld, Configuration, Geometry, ParseError};

/// Error during a solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input grid did not parse.
    Parse(ParseError),
    /// The search did not reach a goal.
    Search(SearchError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "input grid rejected: {err}"),
            Self::Search(err) => write!(f, "search failed: {err}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Search(err) => Some(err),
        }
    }
}

impl From<ParseError> for SolveError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<SearchError> for SolveError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

/// Minimal total energy to organize the burrow in `input`.
///
/// `room_depth` selects the puzzle variant (2 or 4 rows per room in the
/// two bundled variants; any depth the grid matches is accepted).
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for a malformed grid and
/// [`SolveError::Search`] if the search exhausts without a goal — the
/// latter indicates an unsolvable input and is never retried, since a
/// deterministic search cannot succeed the second time.
pub fn solve(input: &str, room_depth: u8) -> Result<u64, SolveError> {
    solve_with_policy(input, room_depth, &SearchPolicy::unbounded()).map(|s| s.cost)
}

/// As [`solve`], with an explicit policy and the full solution returned.
///
/// # Errors
///
/// As [`solve`], plus the policy's budget and cancellation outcomes.
pub fn solve_with_policy(
    input: &str,
    room_depth: u8,
    policy: &SearchPolicy,
) -> Result<Solution<Configuration>, SolveError> {
    let geometry = Geometry::new(room_depth);
    let initial = parse(input, &geometry)?;
    let world = BurrowWorld::new(geometry);
    let solution = uniform_cost(&world, initial, policy)?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failure_surfaces_as_solve_error() {
        let err = solve("#x#", 2).unwrap_err();
        assert!(matches!(err, SolveError::Parse(_)));
    }

    #[test]
    fn budget_failure_surfaces_as_search_error() {
        let grid = "#############\n\
                    #...........#\n\
                    ###B#C#B#D###\n\
                    \u{20}\u{20}#A#D#C#A#\n\
                    \u{20}\u{20}#########";
        let err =
            solve_with_policy(grid, 2, &SearchPolicy::with_max_expansions(1)).unwrap_err();
        assert_eq!(
            err,
            SolveError::Search(SearchError::BudgetExceeded { limit: 1 })
        );
    }
}
