//! Operation errors for joins and moves.
//!
//! Variant order encodes the contract's precedence: when several
//! conditions hold at once, the earliest variant is the one reported.
//! Every error is a normal, expected outcome reported synchronously;
//! a failed operation has no effect on the session.

use derive_more::{Display, Error};

/// Failure modes of joining a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JoinError {
    /// No session with the given id exists.
    #[display("Session does not exist")]
    SessionNotFound,
    /// The session has already ended.
    #[display("Session has already ended")]
    SessionEnded,
    /// Both participant slots are taken; play is underway.
    ///
    /// Informational rather than fatal: callers probing a running
    /// session are expected to see this and carry on.
    #[display("Session already has two participants")]
    SessionFull,
}

/// Failure modes of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// No session with the given id exists.
    #[display("Session does not exist")]
    SessionNotFound,
    /// Fewer than two participants have joined.
    #[display("Session has not started")]
    GameNotStarted,
    /// The session has already ended.
    #[display("Session has already ended")]
    SessionEnded,
    /// It is not this participant's turn (or the id is not a
    /// participant of this session at all).
    #[display("Not this participant's turn")]
    WrongTurn,
    /// Coordinates outside the board, or the cell is already occupied.
    #[display("Invalid board location")]
    InvalidLocation,
}
