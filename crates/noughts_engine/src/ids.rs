//! Identifier newtypes for sessions and participants.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Handle for one game session.
///
/// Issued values are non-negative, unique, and monotonically increasing
/// for the lifetime of a registry. Arbitrary raw values (including
/// negatives) can be wrapped for lookups; a value that was never issued
/// simply fails to resolve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("{_0}")]
pub struct SessionId(i64);

impl SessionId {
    /// Wraps a raw handle value.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Handle for one participant, scoped to a single session.
///
/// Two sessions may issue the same value without collision; a participant
/// id is only meaningful paired with its session id. Within a session,
/// issued values are distinct and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("{_0}")]
pub struct ParticipantId(i64);

impl ParticipantId {
    /// Wraps a raw handle value.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub const fn get(self) -> i64 {
        self.0
    }
}
