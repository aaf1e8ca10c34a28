//! Reducers, game session, and tick scheduler for the Underworld empire
//! simulator.
//!
//! Each variant is a state type plus a pure reducer
//! `(state, action, rolls) -> Result<Transition<State>, RejectionReason>`.
//! A [`GameSession`] owns one state and its roll source; a
//! [`TickScheduler`] drives it on a timer.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `underworld-config.yaml`
//! - [`error`] -- [`SessionError`]
//! - [`log`] -- Bounded newest-first [`ActivityLog`]
//! - [`transition`] -- Reducer and session return types
//! - [`raid`] -- Raid variant state and reducer
//! - [`rpg`] -- RPG variant state, reducer, and takeover rules
//! - [`session`] -- [`GameVariant`] and [`GameSession`]
//! - [`scheduler`] -- [`TickScheduler`] and its cancellable handle
//!
//! [`SessionError`]: error::SessionError
//! [`ActivityLog`]: log::ActivityLog
//! [`GameVariant`]: session::GameVariant
//! [`GameSession`]: session::GameSession
//! [`TickScheduler`]: scheduler::TickScheduler

pub mod config;
pub mod error;
pub mod log;
pub mod raid;
pub mod rpg;
pub mod scheduler;
pub mod session;
pub mod transition;

pub use error::SessionError;
pub use session::{GameSession, GameVariant};
pub use transition::{Applied, Transition, TransitionResult};
