//! Error types for the smartcab crate

use thiserror::Error;

/// Errors surfaced by the agent and its Q-table
///
/// Every variant is a local contract violation. There is no I/O in the core,
/// so nothing here is retryable; callers should let these propagate and abort
/// the trial.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A read or update of a state that was never inserted into the Q-table.
    ///
    /// `ensure` must run for a state before it is read. Fabricating a zero
    /// entry at read time would hide the ordering bug, so this fails instead.
    #[error("state has no Q-table entry (call `ensure` before reading)")]
    UnseenState,

    /// An action outside the valid-action set the entry was built with
    #[error("action has no estimate under this state's entry")]
    UnknownAction,

    /// A decay law was constructed with parameters that break its shape
    #[error("invalid decay parameter: {0}")]
    Decay(&'static str),
}
