//! Tests for the registry surface: id allocation, operation routing,
//! and the not-found precedence over per-session errors.

use noughts_server::{
    JoinError, MoveError, MoveOutcome, ParticipantId, Registry, SessionId, SessionStatus,
    SharedRegistry,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_session_ids_unique_and_monotonic() {
    init_tracing();
    let mut registry = Registry::new();

    let ids: Vec<SessionId> = (0..10).map(|_| registry.create_session()).collect();
    for pair in ids.windows(2) {
        assert!(pair[0].get() < pair[1].get(), "ids must increase: {pair:?}");
    }
    assert!(ids.iter().all(|id| id.get() >= 0));
    assert_eq!(registry.session_ids().len(), 10);
}

#[test]
fn test_unknown_session_ids_rejected() {
    init_tracing();
    let mut registry = Registry::new();
    registry.create_session();

    // Negative probes, and positive ids that were never issued.
    for raw in (-10..0).chain(200..210) {
        let probe = SessionId::new(raw);
        assert_eq!(registry.join_session(probe), Err(JoinError::SessionNotFound));
        assert_eq!(
            registry.submit_move(probe, ParticipantId::new(0), 0, 0),
            Err(MoveError::SessionNotFound)
        );
    }
}

#[test]
fn test_not_found_reported_regardless_of_other_arguments() {
    init_tracing();
    let mut registry = Registry::new();

    // Junk participant and coordinates: the missing session wins.
    assert_eq!(
        registry.submit_move(SessionId::new(-1), ParticipantId::new(-7), -3, 12),
        Err(MoveError::SessionNotFound)
    );
}

#[test]
fn test_full_game_through_registry() {
    init_tracing();
    let mut registry = Registry::new();
    let session = registry.create_session();

    // No moves before the second join.
    assert_eq!(
        registry.submit_move(session, ParticipantId::new(0), 0, 0),
        Err(MoveError::GameNotStarted)
    );

    let first = registry.join_session(session).expect("first join");
    let second = registry.join_session(session).expect("second join");
    assert_ne!(first, second);

    // Joins attempted mid-game keep reporting full without disturbing play.
    assert_eq!(registry.join_session(session), Err(JoinError::SessionFull));
    assert_eq!(registry.submit_move(session, first, 0, 0), Ok(MoveOutcome::Ongoing));
    assert_eq!(registry.join_session(session), Err(JoinError::SessionFull));
    assert_eq!(registry.submit_move(session, second, 1, 0), Ok(MoveOutcome::Ongoing));
    assert_eq!(registry.submit_move(session, first, 0, 1), Ok(MoveOutcome::Ongoing));
    assert_eq!(registry.submit_move(session, second, 1, 1), Ok(MoveOutcome::Ongoing));
    assert_eq!(registry.submit_move(session, first, 0, 2), Ok(MoveOutcome::Won(first)));

    // Late operations on the ended session.
    assert_eq!(registry.join_session(session), Err(JoinError::SessionEnded));
    assert_eq!(
        registry.submit_move(session, second, 2, 2),
        Err(MoveError::SessionEnded)
    );
}

#[test]
fn test_ended_sessions_stay_inspectable() {
    init_tracing();
    let mut registry = Registry::new();
    let session = registry.create_session();
    let first = registry.join_session(session).expect("first join");
    let second = registry.join_session(session).expect("second join");

    for (mover, x, y) in [(first, 0, 0), (second, 1, 0), (first, 0, 1), (second, 1, 1)] {
        registry.submit_move(session, mover, x, y).expect("valid move");
    }
    registry.submit_move(session, first, 0, 2).expect("winning move");

    let record = registry.session(session).expect("session retained");
    assert_eq!(record.status(), SessionStatus::Ended);
    assert_eq!(record.moves().len(), 5);
    assert_eq!(record.participants(), &[Some(first), Some(second)]);
}

#[test]
fn test_sessions_are_independent() {
    init_tracing();
    let mut registry = Registry::new();
    let a = registry.create_session();
    let b = registry.create_session();

    let first = registry.join_session(a).expect("join a");
    registry.join_session(a).expect("join a again");
    registry.submit_move(a, first, 1, 1).expect("move in a");

    // Session b never started; participant ids from a mean nothing there.
    assert_eq!(
        registry.submit_move(b, first, 1, 1),
        Err(MoveError::GameNotStarted)
    );
    assert_eq!(registry.session(b).expect("session b").status(), SessionStatus::AwaitingPlayers);
}

#[test]
fn test_registries_are_independent() {
    init_tracing();
    let mut left = Registry::new();
    let mut right = Registry::new();

    let session = left.create_session();
    // No ambient state: the other registry knows nothing about it.
    assert_eq!(right.join_session(session), Err(JoinError::SessionNotFound));
    assert!(left.join_session(session).is_ok());
}

#[test]
fn test_shared_handle_routes_operations() {
    init_tracing();
    let registry = SharedRegistry::new();
    let session = registry.create_session();

    let first = registry.join_session(session).expect("first join");
    let second = registry.join_session(session).expect("second join");

    assert_eq!(registry.submit_move(session, first, 0, 0), Ok(MoveOutcome::Ongoing));
    assert_eq!(registry.submit_move(session, second, 1, 0), Ok(MoveOutcome::Ongoing));

    let snapshot = registry.session(session).expect("session snapshot");
    assert_eq!(snapshot.moves().len(), 2);
    assert_eq!(snapshot.status(), SessionStatus::InProgress);
}

#[test]
fn test_shared_handle_is_safe_across_threads() {
    init_tracing();
    let registry = SharedRegistry::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                (0..25).map(|_| registry.create_session()).collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<SessionId> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("allocator thread"))
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total, "ids must stay unique under concurrent creation");
    assert_eq!(registry.session_ids().len(), total);
}
