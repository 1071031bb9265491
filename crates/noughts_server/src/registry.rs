//! Session registry: allocates session ids and routes operations.

use noughts_engine::{JoinError, MoveError, MoveOutcome, ParticipantId, Session, SessionId};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Owns every session created during its lifetime.
///
/// Sessions are never deleted, so late operations on ended games are
/// still answered and finished sessions stay inspectable. A registry is
/// an ordinary value with no ambient state; independent registries
/// coexist without interfering.
#[derive(Debug)]
pub struct Registry {
    sessions: HashMap<SessionId, Session>,
    next_id: i64,
}

impl Registry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("creating registry");
        Self {
            sessions: HashMap::new(),
            next_id: 0,
        }
    }

    /// Allocates a new session awaiting its players.
    ///
    /// Always succeeds; ids are unique, monotonically increasing, and
    /// never reused.
    #[instrument(skip(self))]
    pub fn create_session(&mut self) -> SessionId {
        let id = SessionId::new(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, Session::new(id));
        info!(session_id = %id, "session created");
        id
    }

    /// Adds a participant to the given session.
    ///
    /// A missing session outranks every per-session condition: an
    /// unknown id reports [`JoinError::SessionNotFound`] even if the
    /// session would otherwise read as full or ended.
    #[instrument(skip(self))]
    pub fn join_session(&mut self, session: SessionId) -> Result<ParticipantId, JoinError> {
        let session = self.sessions.get_mut(&session).ok_or_else(|| {
            debug!("join on unknown session");
            JoinError::SessionNotFound
        })?;
        session.add_participant()
    }

    /// Submits a move for a participant of the given session.
    ///
    /// Same [`MoveError::SessionNotFound`] precedence as joins; all
    /// other validation happens in the session engine.
    #[instrument(skip(self))]
    pub fn submit_move(
        &mut self,
        session: SessionId,
        participant: ParticipantId,
        x: i32,
        y: i32,
    ) -> Result<MoveOutcome, MoveError> {
        let session = self.sessions.get_mut(&session).ok_or_else(|| {
            debug!("move on unknown session");
            MoveError::SessionNotFound
        })?;
        session.submit_move(participant, x, y)
    }

    /// Looks up a session for inspection.
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Ids of every session ever created, in no particular order.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
