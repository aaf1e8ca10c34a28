//! Reducer and session return types.

use underworld_types::RejectionReason;

/// A successful reducer step: the next state and what it logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    /// State after the action.
    pub state: S,
    /// Activity log entry written by the action, if any.
    pub entry: Option<String>,
}

impl<S> Transition<S> {
    /// A transition that wrote `entry` to the activity log.
    pub fn logged(state: S, entry: impl Into<String>) -> Self {
        Self {
            state,
            entry: Some(entry.into()),
        }
    }

    /// A transition that changed state without logging.
    pub const fn silent(state: S) -> Self {
        Self { state, entry: None }
    }
}

/// What a reducer returns: the next state, or why nothing changed.
pub type ReduceResult<S> = Result<Transition<S>, RejectionReason>;

/// An action the session accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Wire name of the applied action.
    pub action: &'static str,
    /// Activity log entry written, if any.
    pub entry: Option<String>,
}

/// What a session returns for each dispatched action.
pub type TransitionResult = Result<Applied, RejectionReason>;
