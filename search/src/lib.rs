//! Burrow Search: exact uniform-cost search over structurally keyed states.
//!
//! This crate provides the generic engine. It depends only on
//! `burrow_kernel` — it does NOT depend on `burrow_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! burrow_kernel  ←  burrow_search  ←  burrow_harness
//! (heap, stores)    (frontier, loop)   (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchWorld`](contract::SearchWorld) — trait a domain implements to
//!   be searchable
//! - [`SearchNode`](node::SearchNode) — a queued state with its
//!   precomputed structural key
//! - [`Frontier`](frontier::Frontier) — lowest-cost-first queue plus the
//!   settled-state store
//! - [`SearchPolicy`](policy::SearchPolicy) — expansion budget and
//!   cancellation
//! - [`uniform_cost`](search::uniform_cost) — the search loop itself
//!
//! The engine is exact: all edge costs are non-negative, so the first goal
//! state popped carries the minimal accumulated cost. No heuristic is
//! consulted.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
