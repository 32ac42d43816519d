//! Typed search errors.
//!
//! Exhaustion is a first-class outcome, never silently swallowed: a
//! deterministic search that empties its queue cannot succeed on retry, so
//! the error propagates to the caller unchanged.

use burrow_kernel::canon::CanonError;

/// Typed failure for a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The queue emptied before a goal state was popped. Indicates an
    /// unsolvable input or a defect in the domain's successor rules.
    Exhausted {
        /// Expansions performed before the queue emptied.
        expansions: u64,
    },
    /// The expansion budget in [`crate::policy::SearchPolicy`] ran out.
    BudgetExceeded { limit: u64 },
    /// The caller's cancellation token was triggered.
    Canceled,
    /// A state key could not be canonicalized. Indicates a defect in the
    /// domain's key projection.
    Key(CanonError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { expansions } => {
                write!(f, "search exhausted after {expansions} expansions with no goal")
            }
            Self::BudgetExceeded { limit } => {
                write!(f, "expansion budget of {limit} exceeded")
            }
            Self::Canceled => write!(f, "search canceled"),
            Self::Key(err) => write!(f, "state key canonicalization failed: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Key(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanonError> for SearchError {
    fn from(err: CanonError) -> Self {
        Self::Key(err)
    }
}
