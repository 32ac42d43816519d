//! Search policy: budgets and cancellation.
//!
//! State spaces are unbounded by construction, so a reusable engine wants
//! an external stop signal even though the bundled puzzle inputs terminate
//! on their own. Both the budget and the token are checked once per pop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Budget and cancellation configuration for one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// External stop signal, checked once per pop.
    pub cancel: Option<CancelToken>,
}

impl SearchPolicy {
    /// Unbounded policy: no budget, no cancellation.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Policy with a hard expansion cap.
    #[must_use]
    pub fn with_max_expansions(limit: u64) -> Self {
        Self {
            max_expansions: Some(limit),
            cancel: None,
        }
    }
}

/// Shared cancellation flag.
///
/// Clone the token, hand one copy to the search policy, and trigger the
/// other from a timer or signal handler. Cancellation is one-way.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an untriggered token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been triggered.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
