// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and checks per-session anti-forgery tokens.
pub trait CsrfProtector: Send + Sync {
    fn issue(&self, session_id: &str) -> String;
    fn verify(&self, session_id: &str, token: &str) -> bool;
}
