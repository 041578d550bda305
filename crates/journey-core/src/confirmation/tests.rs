use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Barrier;
use uuid::Uuid;

use super::ConfirmationService;
use crate::{
    error::{JourneyError, Result},
    models::{ConfirmationOutcome, Participant},
    store::ParticipantStore,
};

/// In-memory participant store that counts calls and can be told to fail.
#[derive(Default)]
struct FakeStore {
    participants: Mutex<HashMap<Uuid, Participant>>,
    get_calls: AtomicUsize,
    confirm_calls: AtomicUsize,
    fail_get: AtomicBool,
    fail_confirm: AtomicBool,
    delay: Option<Duration>,
    /// Holds every reader after its snapshot until all readers have one.
    read_barrier: Option<Barrier>,
}

impl FakeStore {
    fn with_participant(is_confirmed: bool) -> (Arc<Self>, Uuid) {
        let store = Self::default();
        let id = Uuid::new_v4();
        store.participants.lock().unwrap().insert(
            id,
            Participant {
                id,
                trip_id: Uuid::new_v4(),
                email: "guest@example.com".to_string(),
                is_confirmed,
            },
        );
        (Arc::new(store), id)
    }

    fn is_confirmed(&self, id: Uuid) -> bool {
        self.participants.lock().unwrap()[&id].is_confirmed
    }

    fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn confirm_calls(&self) -> usize {
        self.confirm_calls.load(Ordering::SeqCst)
    }
}

fn io_failure() -> JourneyError {
    JourneyError::database("connection lost").with_source(rusqlite::Error::InvalidQuery)
}

#[async_trait]
impl ParticipantStore for FakeStore {
    async fn get_participant(&self, id: Uuid) -> Result<Participant> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(io_failure());
        }
        let snapshot = self
            .participants
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(JourneyError::ParticipantNotFound { id });
        if let Some(barrier) = &self.read_barrier {
            barrier.wait().await;
        }
        snapshot
    }

    async fn confirm_participant(&self, id: Uuid) -> Result<bool> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_confirm.load(Ordering::SeqCst) {
            return Err(io_failure());
        }
        let mut participants = self.participants.lock().unwrap();
        match participants.get_mut(&id) {
            Some(p) if !p.is_confirmed => {
                p.is_confirmed = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn service(store: &Arc<FakeStore>) -> ConfirmationService {
    ConfirmationService::new(store.clone())
}

#[tokio::test]
async fn test_malformed_identifiers_never_reach_store() {
    let (store, _) = FakeStore::with_participant(false);
    let service = service(&store);

    let malformed = [
        "not-a-uuid",
        "",
        "123",
        "0000000-0000-0000-0000-000000000000",
        "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz",
    ];
    for raw in malformed {
        assert_eq!(
            service.confirm_participant(raw).await,
            ConfirmationOutcome::InvalidIdentifier,
            "input {raw:?}"
        );
    }
    assert_eq!(store.get_calls(), 0);
    assert_eq!(store.confirm_calls(), 0);
}

#[tokio::test]
async fn test_unknown_participant_is_not_found() {
    let (store, _) = FakeStore::with_participant(false);
    let outcome = service(&store)
        .confirm_participant(&Uuid::new_v4().to_string())
        .await;

    assert_eq!(outcome, ConfirmationOutcome::NotFound);
    assert_eq!(store.confirm_calls(), 0);
}

#[tokio::test]
async fn test_already_confirmed_skips_write() {
    let (store, id) = FakeStore::with_participant(true);
    let outcome = service(&store).confirm_participant(&id.to_string()).await;

    assert_eq!(outcome, ConfirmationOutcome::AlreadyConfirmed);
    assert_eq!(store.get_calls(), 1);
    assert_eq!(store.confirm_calls(), 0);
}

#[tokio::test]
async fn test_confirm_then_confirm_again() {
    let (store, id) = FakeStore::with_participant(false);
    let service = service(&store);

    assert_eq!(
        service.confirm_participant(&id.to_string()).await,
        ConfirmationOutcome::Success
    );
    assert!(store.is_confirmed(id));

    assert_eq!(
        service.confirm_participant(&id.to_string()).await,
        ConfirmationOutcome::AlreadyConfirmed
    );
    assert!(store.is_confirmed(id));
    assert_eq!(store.confirm_calls(), 1);
}

#[tokio::test]
async fn test_uppercase_identifier_is_accepted() {
    let (store, id) = FakeStore::with_participant(false);
    let outcome = service(&store)
        .confirm_participant(&id.to_string().to_uppercase())
        .await;

    assert_eq!(outcome, ConfirmationOutcome::Success);
}

#[tokio::test]
async fn test_read_failure_is_persistence_failure() {
    let (store, id) = FakeStore::with_participant(false);
    store.fail_get.store(true, Ordering::SeqCst);

    let outcome = service(&store).confirm_participant(&id.to_string()).await;

    assert_eq!(outcome, ConfirmationOutcome::PersistenceFailure);
    assert!(outcome.is_retryable());
    assert!(!store.is_confirmed(id));
    assert_eq!(store.confirm_calls(), 0);
}

#[tokio::test]
async fn test_write_failure_leaves_flag_unchanged() {
    let (store, id) = FakeStore::with_participant(false);
    store.fail_confirm.store(true, Ordering::SeqCst);
    let service = service(&store);

    assert_eq!(
        service.confirm_participant(&id.to_string()).await,
        ConfirmationOutcome::PersistenceFailure
    );
    assert!(!store.is_confirmed(id));

    // the caller retries once the store recovers
    store.fail_confirm.store(false, Ordering::SeqCst);
    assert_eq!(
        service.confirm_participant(&id.to_string()).await,
        ConfirmationOutcome::Success
    );
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let (store, id) = FakeStore::with_participant(false);
    let store = Arc::new(FakeStore {
        participants: Mutex::new(store.participants.lock().unwrap().clone()),
        delay: Some(Duration::from_millis(500)),
        ..Default::default()
    });

    let outcome = ConfirmationService::new(store.clone())
        .with_store_timeout(Duration::from_millis(20))
        .confirm_participant(&id.to_string())
        .await;

    assert_eq!(outcome, ConfirmationOutcome::PersistenceFailure);
    assert_eq!(store.confirm_calls(), 0);
    assert!(!store.is_confirmed(id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_confirmations_succeed_once() {
    const RACERS: usize = 8;
    let (seed, id) = FakeStore::with_participant(false);
    // every request reads the unconfirmed record before any of them writes
    let store = Arc::new(FakeStore {
        participants: Mutex::new(seed.participants.lock().unwrap().clone()),
        read_barrier: Some(Barrier::new(RACERS)),
        ..Default::default()
    });
    let service = service(&store);
    let raw = id.to_string();

    let outcomes: Vec<ConfirmationOutcome> = confirm_concurrently(&service, &raw, RACERS).await;

    let successes = outcomes.iter().filter(|o| o.is_success()).count();
    let already = outcomes
        .iter()
        .filter(|o| **o == ConfirmationOutcome::AlreadyConfirmed)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(already, RACERS - 1);
    // all losers reached the write and lost there, not at the read
    assert_eq!(store.confirm_calls(), RACERS);
    assert!(store.is_confirmed(id));
}

async fn confirm_concurrently(
    service: &ConfirmationService,
    raw: &str,
    n: usize,
) -> Vec<ConfirmationOutcome> {
    let handles: Vec<_> = (0..n)
        .map(|_| {
            let service = service.clone();
            let raw = raw.to_string();
            tokio::spawn(async move { service.confirm_participant(&raw).await })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(n);
    for handle in handles {
        outcomes.push(handle.await.expect("task panicked"));
    }
    outcomes
}
