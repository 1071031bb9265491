//! Single-session state machine: participants, move log, and win/draw
//! evaluation.

use crate::{JoinError, Location, MoveError, ParticipantId, SessionId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a session.
///
/// Transitions run strictly forward: awaiting players → in progress →
/// ended. `Ended` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum SessionStatus {
    /// Waiting for two participants to join.
    #[display("awaiting players")]
    AwaitingPlayers,
    /// Both participants joined; moves are accepted.
    #[display("in progress")]
    InProgress,
    /// A win or draw occurred; the session is frozen.
    #[display("ended")]
    Ended,
}

/// Result of a successfully recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing terminal happened; play continues.
    Ongoing,
    /// The mover completed a line. Carries the winner's id, which is
    /// always the participant that made this move.
    Won(ParticipantId),
    /// Ninth move recorded with no winner. Carries the id of the
    /// participant who did *not* make the final move, so callers can
    /// tell a draw from a win by comparing the id against the mover.
    Draw(ParticipantId),
}

/// One game session: two participants in join order, an ordered move
/// log, and an occupancy board for O(1) cell lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    status: SessionStatus,
    participants: [Option<ParticipantId>; 2],
    moves: Vec<Location>,
    /// Which participant slot (0 or 1) holds each cell, row-major.
    board: [Option<u8>; 9],
    /// Next participant id to mint; join-order deterministic, never reused.
    next_participant: i64,
}

impl Session {
    /// Creates a session awaiting its players.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "creating session");
        Self {
            id,
            status: SessionStatus::AwaitingPlayers,
            participants: [None, None],
            moves: Vec::new(),
            board: [None; 9],
            next_participant: 0,
        }
    }

    /// Session handle.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Current lifecycle phase.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Participant slots in join order; the first joiner moves first.
    pub fn participants(&self) -> &[Option<ParticipantId>; 2] {
        &self.participants
    }

    /// Moves in the order they were played. Never re-sorted; the order
    /// encodes turn sequence and recency.
    pub fn moves(&self) -> &[Location] {
        &self.moves
    }

    /// Registers a participant and returns its freshly minted id.
    ///
    /// Filling the second slot starts the game; the new id is still
    /// returned to the second joiner. Further joins report
    /// [`JoinError::SessionFull`] without minting an id. No location or
    /// ordering validation happens at this step.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn add_participant(&mut self) -> Result<ParticipantId, JoinError> {
        if self.status == SessionStatus::Ended {
            warn!("join rejected, session has ended");
            return Err(JoinError::SessionEnded);
        }

        let slot = match self.participants.iter().position(|p| p.is_none()) {
            Some(slot) => slot,
            None => {
                debug!("join rejected, session is full");
                return Err(JoinError::SessionFull);
            }
        };

        let participant = ParticipantId::new(self.next_participant);
        self.next_participant += 1;
        self.participants[slot] = Some(participant);
        if slot == 1 {
            self.status = SessionStatus::InProgress;
        }

        info!(participant_id = %participant, slot, status = %self.status, "participant joined");
        Ok(participant)
    }

    /// Validates and records a move, then evaluates the board.
    ///
    /// Checks run in contract precedence order: lifecycle, then turn,
    /// then location. Validation completes before any mutation, so a
    /// rejected move leaves the session untouched.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn submit_move(
        &mut self,
        participant: ParticipantId,
        x: i32,
        y: i32,
    ) -> Result<MoveOutcome, MoveError> {
        match self.status {
            SessionStatus::AwaitingPlayers => {
                warn!("move rejected, game not started");
                return Err(MoveError::GameNotStarted);
            }
            SessionStatus::Ended => {
                warn!("move rejected, session has ended");
                return Err(MoveError::SessionEnded);
            }
            SessionStatus::InProgress => {}
        }

        // Turn alternates by move-count parity; the first joiner moves
        // on even counts. Identity outranks location in the contract.
        let mover_slot = self.moves.len() % 2;
        let expected = self.participants[mover_slot]
            .expect("in-progress session has both participants assigned");
        if participant != expected {
            warn!(participant_id = %participant, expected = %expected, "move rejected, wrong turn");
            return Err(MoveError::WrongTurn);
        }

        let location = match Location::new(x, y) {
            Some(location) if self.board[location.index()].is_none() => location,
            _ => {
                warn!(x, y, "move rejected, invalid location");
                return Err(MoveError::InvalidLocation);
            }
        };

        self.moves.push(location);
        self.board[location.index()] = Some(mover_slot as u8);

        if self.line_completed_by(mover_slot as u8) {
            self.status = SessionStatus::Ended;
            info!(winner = %expected, moves = self.moves.len(), "session won");
            return Ok(MoveOutcome::Won(expected));
        }

        if self.moves.len() == 9 {
            // No early draw detection: the board must fill up. The draw
            // signal carries the non-mover's id.
            let other = self.participants[1 - mover_slot]
                .expect("in-progress session has both participants assigned");
            self.status = SessionStatus::Ended;
            info!("session drawn");
            return Ok(MoveOutcome::Draw(other));
        }

        debug!(location = %location, moves = self.moves.len(), "move recorded");
        Ok(MoveOutcome::Ongoing)
    }

    /// Whether the given slot owns all three cells of any winning line.
    ///
    /// Not evaluated below five moves, where no line can be complete.
    /// Ownership matters: a line covered by a mix of both participants'
    /// marks does not end the game.
    fn line_completed_by(&self, slot: u8) -> bool {
        if self.moves.len() < 5 {
            return false;
        }
        Location::LINES
            .iter()
            .any(|line| line.iter().all(|cell| self.board[cell.index()] == Some(slot)))
    }
}
