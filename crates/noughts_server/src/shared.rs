//! Thread-safe registry handle.

use crate::Registry;
use noughts_engine::{JoinError, MoveError, MoveOutcome, ParticipantId, Session, SessionId};
use std::sync::{Arc, Mutex};
use tracing::instrument;

/// Cloneable handle serializing all access to one [`Registry`].
///
/// The engine's invariants (turn alternation, no duplicate moves,
/// exactly-once terminal transition) assume operations on a session are
/// applied sequentially. This handle enforces that with a single lock,
/// so two racing `submit_move` calls can never both pass the turn check
/// before either appends.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wraps a fresh registry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Allocates a new session awaiting its players.
    #[instrument(skip(self))]
    pub fn create_session(&self) -> SessionId {
        self.inner.lock().unwrap().create_session()
    }

    /// Adds a participant to the given session.
    #[instrument(skip(self))]
    pub fn join_session(&self, session: SessionId) -> Result<ParticipantId, JoinError> {
        self.inner.lock().unwrap().join_session(session)
    }

    /// Submits a move for a participant of the given session.
    #[instrument(skip(self))]
    pub fn submit_move(
        &self,
        session: SessionId,
        participant: ParticipantId,
        x: i32,
        y: i32,
    ) -> Result<MoveOutcome, MoveError> {
        self.inner.lock().unwrap().submit_move(session, participant, x, y)
    }

    /// Clones a session snapshot for inspection.
    #[instrument(skip(self))]
    pub fn session(&self, id: SessionId) -> Option<Session> {
        self.inner.lock().unwrap().session(id).cloned()
    }

    /// Ids of every session ever created, in no particular order.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.inner.lock().unwrap().session_ids()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
