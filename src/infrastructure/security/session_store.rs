// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult, dto::AdminSession, error::ApplicationError,
    ports::session::SessionStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local session table. Sessions vanish on restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, AdminSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, AdminSession>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: AdminSession) -> ApplicationResult<()> {
        let mut guard = self.guard()?;
        let now = session.created_at;
        guard.retain(|_, existing| !existing.is_expired(now));
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>> {
        Ok(self.guard()?.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> ApplicationResult<()> {
        self.guard()?.remove(session_id);
        Ok(())
    }
}
