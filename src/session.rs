use ahash::{AHashMap, RandomState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::model::WorkflowState;

pub const SESSION_COOKIE: &str = "relay_session";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Profile defaults for a new session's identifier inputs.
#[derive(Debug, Clone, Default)]
pub struct UserDefaults {
    pub source_user_id: String,
    pub owner_id: String,
}

struct Entry {
    state: WorkflowState,
    last_seen: Instant,
}

/// Workflow state per browser session, held in process memory. A session
/// idle for longer than the ttl is ended and its state dropped.
pub struct SessionStore {
    sessions: Mutex<AHashMap<String, Entry>>,
    defaults: UserDefaults,
    ttl: Duration,
    ids: RandomState,
    counter: AtomicU64,
}

impl SessionStore {
    #[must_use]
    pub fn new(defaults: UserDefaults) -> Self {
        Self::with_ttl(defaults, DEFAULT_SESSION_TTL)
    }

    #[must_use]
    pub fn with_ttl(defaults: UserDefaults, ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(AHashMap::new()),
            defaults,
            ttl,
            ids: RandomState::new(),
            counter: AtomicU64::new(0),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, AHashMap<String, Entry>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The stored state, or a fresh one seeded with the profile defaults.
    #[must_use]
    pub fn load(&self, session_id: &str) -> WorkflowState {
        let now = Instant::now();
        let mut sessions = self.sessions();
        let expired = match sessions.get(session_id) {
            Some(entry) if now.duration_since(entry.last_seen) <= self.ttl => {
                return entry.state.clone();
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            tracing::debug!(session = %session_id, "session expired");
            sessions.remove(session_id);
        }
        self.fresh_state()
    }

    /// Store the state and drop every session that has been idle past the ttl.
    pub fn save(&self, session_id: &str, state: WorkflowState) {
        let now = Instant::now();
        let mut sessions = self.sessions();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= self.ttl);
        sessions.insert(
            session_id.to_string(),
            Entry {
                state,
                last_seen: now,
            },
        );
    }

    pub fn end(&self, session_id: &str) {
        self.sessions().remove(session_id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }

    fn fresh_state(&self) -> WorkflowState {
        WorkflowState::new(&self.defaults.source_user_id, &self.defaults.owner_id)
    }

    #[must_use]
    pub fn new_session_id(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{:016x}{n:x}", self.ids.hash_one((nanos, n)))
    }
}
