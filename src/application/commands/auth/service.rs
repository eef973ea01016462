// src/application/commands/auth/service.rs
use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{
    security::{CsrfProtector, PasswordHasher},
    session::SessionStore,
    time::Clock,
};

#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Argon2 PHC string for the single admin account. Login is refused when unset.
    pub admin_password_hash: Option<String>,
    pub session_ttl: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            admin_password_hash: None,
            session_ttl: Duration::hours(24),
        }
    }
}

/// Single-admin authentication: anonymous sessions carry a CSRF token, a
/// successful login swaps them for a fresh authenticated session.
pub struct AdminAuthService {
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) sessions: Arc<dyn SessionStore>,
    pub(super) csrf: Arc<dyn CsrfProtector>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: AuthSettings,
}

impl AdminAuthService {
    pub fn new(
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        csrf: Arc<dyn CsrfProtector>,
        clock: Arc<dyn Clock>,
        settings: AuthSettings,
    ) -> Self {
        Self {
            password_hasher,
            sessions,
            csrf,
            clock,
            settings,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.settings.session_ttl
    }
}
