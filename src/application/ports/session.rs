// src/application/ports/session.rs
use crate::application::{ApplicationResult, dto::AdminSession};
use async_trait::async_trait;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: AdminSession) -> ApplicationResult<()>;

    /// Look up a session by id. Expiry is the caller's concern.
    async fn get(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>>;

    /// Remove the session (e.g. on logout). Unknown ids are ignored.
    async fn remove(&self, session_id: &str) -> ApplicationResult<()>;
}
