//! Domain worlds searchable by the generic engine.

pub mod burrow;
