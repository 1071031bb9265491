//! Session engine for an in-process tic-tac-toe server.
//!
//! A [`Session`] tracks two participants, an ordered move log, and a
//! lifecycle that runs awaiting-players → in-progress → ended, evaluating
//! win and draw conditions on every recorded move. Sessions are normally
//! driven through the registry in the `noughts_server` crate; this crate
//! is the pure game logic with no session routing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod ids;
mod location;
mod session;

pub use error::{JoinError, MoveError};
pub use ids::{ParticipantId, SessionId};
pub use location::Location;
pub use session::{MoveOutcome, Session, SessionStatus};
