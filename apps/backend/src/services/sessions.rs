//! In-memory quiz session store.

use std::collections::HashMap;

use accent_core::QuizSession;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Live quiz sessions keyed by session ID.
///
/// Every mutation goes through the write lock, so a countdown tick and an
/// answer submission for the same session never interleave.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under a fresh ID.
    pub async fn insert(&self, session: QuizSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Run `f` against a session, or return `None` if it does not exist.
    pub async fn with<R>(&self, id: Uuid, f: impl FnOnce(&QuizSession) -> R) -> Option<R> {
        self.sessions.read().await.get(&id).map(f)
    }

    /// Run `f` against a session mutably, or return `None` if it does not exist.
    pub async fn with_mut<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut QuizSession) -> R,
    ) -> Option<R> {
        self.sessions.write().await.get_mut(&id).map(f)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Remove a session if `evict` accepts it; the check runs under the write lock.
    pub async fn remove_if(&self, id: Uuid, evict: impl FnOnce(&QuizSession) -> bool) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&id) {
            Some(session) if evict(session) => sessions.remove(&id).is_some(),
            _ => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
