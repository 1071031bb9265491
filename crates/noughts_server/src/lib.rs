//! In-process tic-tac-toe session server.
//!
//! A [`Registry`] owns the sessions and exposes the server's three
//! operations: create a session, join it, submit a move. The state
//! machine behind each session lives in the `noughts_engine` crate.
//! [`SharedRegistry`] is the handle to use when several clients drive
//! one registry from different threads.
//!
//! # Example
//!
//! ```
//! use noughts_server::{MoveOutcome, Registry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = Registry::new();
//! let session = registry.create_session();
//!
//! let first = registry.join_session(session)?;
//! let second = registry.join_session(session)?;
//!
//! // The first joiner moves first.
//! let outcome = registry.submit_move(session, first, 0, 0)?;
//! assert_eq!(outcome, MoveOutcome::Ongoing);
//! # let _ = second;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod registry;
mod shared;

pub use registry::Registry;
pub use shared::SharedRegistry;

// Re-export the engine surface so callers need only one crate.
pub use noughts_engine::{
    JoinError, Location, MoveError, MoveOutcome, ParticipantId, Session, SessionId, SessionStatus,
};
