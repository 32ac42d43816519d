//! Burrow Kernel: the data-structure layer of the burrow solver.
//!
//! # Module Dependency Direction
//!
//! `canon` ← `hash` ← `store`; `heap` stands alone.
//!
//! One-way only. No cycles. `store` combines canonical serialization with
//! content fingerprints to key composite values by structure instead of by
//! reference. `heap` is the comparator-driven priority queue the search
//! layer builds its frontier on.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;
pub mod heap;
pub mod store;
