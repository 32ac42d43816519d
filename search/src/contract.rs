//! Search world contract trait.

use serde::Serialize;

/// Trait for domains that support uniform-cost search.
///
/// # Contract
///
/// - `cost` returns the accumulated, non-negative cost already embedded in
///   the state; successors must never cost less than their parent.
/// - `key` projects the identity-relevant part of a state. Two states with
///   structurally equal keys are the same state for deduplication, even
///   when other fields (such as accumulated cost) differ.
/// - `successors` must be pure: same state in, same states out.
pub trait SearchWorld {
    /// The full search state.
    type State;
    /// The identity-relevant projection used for structural deduplication.
    type Key: Serialize;

    /// Accumulated cost of reaching this state from the root.
    fn cost(&self, state: &Self::State) -> u64;

    /// The structural identity of the state, independent of accumulated
    /// cost and of any incidental ordering inside the state.
    fn key(&self, state: &Self::State) -> Self::Key;

    /// Whether the state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All states reachable from `state` in one move.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}
