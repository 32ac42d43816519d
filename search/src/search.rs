//! Search entry point and expansion loop.
//!
//! Uniform-cost search (Dijkstra over an implicit, lazily generated graph):
//! the frontier always yields the lowest accumulated cost among unsettled
//! states, so the first time a goal state is popped its cost is provably
//! minimal. Costs are non-negative by the [`SearchWorld`] contract.

use burrow_kernel::store::Canonical;

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;

/// Counters describing how a search run behaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// States expanded (popped, settled, and asked for successors).
    pub expansions: u64,
    /// Distinct states settled, including the goal.
    pub distinct_states: u64,
    /// High-water mark of the queue size.
    pub frontier_high_water: u64,
    /// Pops discarded because the state was already settled cheaper.
    pub duplicates_suppressed: u64,
}

/// A successful search outcome.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// The goal state that was popped.
    pub state: S,
    /// Its accumulated cost — minimal over all paths to any goal.
    pub cost: u64,
    /// Run counters.
    pub stats: SearchStats,
}

/// Run uniform-cost search from `root` until a goal state is popped.
///
/// The loop: pop the cheapest state; discard it if a structurally equal
/// state was already settled; otherwise settle it, test the goal, and push
/// every not-yet-settled successor. Deduplication uses the world's key
/// projection, never reference identity — successor states are rebuilt by
/// value on every transition.
///
/// # Errors
///
/// - [`SearchError::Exhausted`] if the queue empties with no goal.
/// - [`SearchError::BudgetExceeded`] / [`SearchError::Canceled`] when the
///   policy stops the run.
/// - [`SearchError::Key`] if a state key fails to canonicalize.
pub fn uniform_cost<W: SearchWorld>(
    world: &W,
    root: W::State,
    policy: &SearchPolicy,
) -> Result<Solution<W::State>, SearchError> {
    let mut frontier = Frontier::new();
    let mut expansions: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    let root_cost = world.cost(&root);
    let root_key = Canonical::new(world.key(&root))?;
    frontier.push(SearchNode {
        cost: root_cost,
        key: root_key,
        state: root,
    });

    loop {
        if let Some(token) = &policy.cancel {
            if token.is_canceled() {
                return Err(SearchError::Canceled);
            }
        }

        let Some(node) = frontier.pop() else {
            return Err(SearchError::Exhausted { expansions });
        };

        if frontier.is_settled(&node.key) {
            duplicates_suppressed += 1;
            continue;
        }
        let SearchNode { state, cost, key } = node;
        frontier.settle(key, cost);

        if world.is_goal(&state) {
            return Ok(Solution {
                state,
                cost,
                stats: SearchStats {
                    expansions,
                    distinct_states: frontier.settled_len() as u64,
                    frontier_high_water: frontier.high_water(),
                    duplicates_suppressed,
                },
            });
        }

        if let Some(limit) = policy.max_expansions {
            if expansions >= limit {
                return Err(SearchError::BudgetExceeded { limit });
            }
        }
        expansions += 1;

        for next in world.successors(&state) {
            let next_key = Canonical::new(world.key(&next))?;
            if frontier.is_settled(&next_key) {
                continue;
            }
            frontier.push(SearchNode {
                cost: world.cost(&next),
                key: next_key,
                state: next,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CancelToken;

    /// A straight line 0 → 1 → … → goal, each step costing `step`.
    struct Line {
        goal: u64,
        step: u64,
    }

    impl SearchWorld for Line {
        type State = (u64, u64); // (position, accumulated cost)
        type Key = u64;

        fn cost(&self, state: &Self::State) -> u64 {
            state.1
        }
        fn key(&self, state: &Self::State) -> u64 {
            state.0
        }
        fn is_goal(&self, state: &Self::State) -> bool {
            state.0 == self.goal
        }
        fn successors(&self, state: &Self::State) -> Vec<Self::State> {
            if state.0 >= self.goal {
                Vec::new()
            } else {
                vec![(state.0 + 1, state.1 + self.step)]
            }
        }
    }

    /// Two paths from the root to a shared state: one cheap and long, one
    /// expensive and short. The goal sits behind the shared state.
    struct Diamond;

    impl SearchWorld for Diamond {
        type State = (&'static str, u64);
        type Key = &'static str;

        fn cost(&self, state: &Self::State) -> u64 {
            state.1
        }
        fn key(&self, state: &Self::State) -> &'static str {
            state.0
        }
        fn is_goal(&self, state: &Self::State) -> bool {
            state.0 == "goal"
        }
        fn successors(&self, state: &Self::State) -> Vec<Self::State> {
            match state.0 {
                "root" => vec![("left", state.1 + 1), ("mid", state.1 + 5)],
                "left" => vec![("mid", state.1 + 1)],
                "mid" => vec![("goal", state.1 + 10)],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn line_world_reaches_goal_at_minimal_cost() {
        let world = Line { goal: 5, step: 3 };
        let solution = uniform_cost(&world, (0, 0), &SearchPolicy::unbounded()).unwrap();
        assert_eq!(solution.cost, 15);
        assert_eq!(solution.state.0, 5);
        assert_eq!(solution.stats.expansions, 5);
        assert_eq!(solution.stats.distinct_states, 6);
    }

    #[test]
    fn root_that_is_already_a_goal_costs_nothing() {
        let world = Line { goal: 0, step: 1 };
        let solution = uniform_cost(&world, (0, 0), &SearchPolicy::unbounded()).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.stats.expansions, 0);
    }

    #[test]
    fn diamond_settles_shared_state_via_cheaper_path() {
        let solution = uniform_cost(&Diamond, ("root", 0), &SearchPolicy::unbounded()).unwrap();
        // root→left→mid→goal = 1 + 1 + 10, beating root→mid→goal = 5 + 10.
        assert_eq!(solution.cost, 12);
        assert_eq!(
            solution.stats.duplicates_suppressed, 1,
            "the costlier queued copy of mid must be discarded at pop"
        );
    }

    #[test]
    fn unreachable_goal_reports_exhaustion() {
        let world = Line { goal: 5, step: 1 };
        // Start past the goal: no successors, goal unreachable.
        let err = uniform_cost(&world, (6, 0), &SearchPolicy::unbounded()).unwrap_err();
        assert_eq!(err, SearchError::Exhausted { expansions: 1 });
    }

    #[test]
    fn budget_stops_a_long_run() {
        let world = Line { goal: 1000, step: 1 };
        let err =
            uniform_cost(&world, (0, 0), &SearchPolicy::with_max_expansions(10)).unwrap_err();
        assert_eq!(err, SearchError::BudgetExceeded { limit: 10 });
    }

    #[test]
    fn pre_triggered_cancellation_stops_immediately() {
        let token = CancelToken::new();
        token.cancel();
        let policy = SearchPolicy {
            max_expansions: None,
            cancel: Some(token),
        };
        let world = Line { goal: 5, step: 1 };
        let err = uniform_cost(&world, (0, 0), &policy).unwrap_err();
        assert_eq!(err, SearchError::Canceled);
    }

    #[test]
    fn repeated_runs_agree() {
        let first = uniform_cost(&Diamond, ("root", 0), &SearchPolicy::unbounded()).unwrap();
        let second = uniform_cost(&Diamond, ("root", 0), &SearchPolicy::unbounded()).unwrap();
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.stats, second.stats);
    }
}
