//! Error types for the `underworld-core` crate.
//!
//! Rejected actions are not errors; see
//! [`RejectionReason`](underworld_types::RejectionReason). These types cover
//! building sessions, serializing snapshots, and joining the scheduler task.

/// Errors raised while building or running a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The starting world map could not be built.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: underworld_world::WorldError,
    },

    /// A state snapshot could not be serialized.
    #[error("failed to serialize snapshot: {source}")]
    Snapshot {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The scheduler task panicked or was aborted.
    #[error("scheduler task failed: {source}")]
    Scheduler {
        /// The underlying join error.
        #[from]
        source: tokio::task::JoinError,
    },
}
