//! Burrow Harness: domain worlds and the solve runner.
//!
//! The harness does NOT implement search logic — it delegates to
//! `burrow_search`. Worlds provide domain data and move rules only; the
//! runner owns the parse → world → search wiring.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;
