// tests/support/mocks/security.rs
use async_trait::async_trait;
use pressroom::application::{
    ApplicationResult,
    dto::AdminSession,
    error::ApplicationError,
    ports::{security::PasswordHasher, session::SessionStore},
};
use pressroom::infrastructure::security::session_store::InMemorySessionStore;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const ADMIN_PASSWORD_HASH: &str = "plain:correct horse battery staple";

/// Skips argon2 so HTTP tests stay fast. Hashes are `plain:<password>`.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain:") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// In-memory store that counts how many sessions were ever written to it.
#[derive(Default)]
pub struct CountingSessionStore {
    inner: InMemorySessionStore,
    inserts: AtomicUsize,
}

impl CountingSessionStore {
    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for CountingSessionStore {
    async fn insert(&self, session: AdminSession) -> ApplicationResult<()> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(session).await
    }

    async fn get(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>> {
        self.inner.get(session_id).await
    }

    async fn remove(&self, session_id: &str) -> ApplicationResult<()> {
        self.inner.remove(session_id).await
    }
}
