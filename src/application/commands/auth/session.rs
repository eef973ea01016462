// src/application/commands/auth/session.rs
use super::AdminAuthService;
use crate::application::{
    dto::AdminSession,
    error::{ApplicationError, ApplicationResult},
};
use uuid::Uuid;

impl AdminAuthService {
    /// Start an anonymous session. Only authenticated sessions are stored:
    /// an anonymous one lives in its cookie, and its CSRF token is derived
    /// from the id, so unauthenticated traffic never grows the store.
    pub fn start_session(&self) -> AdminSession {
        self.anonymous_session(Uuid::new_v4().to_string())
    }

    /// Resolve the session named by a cookie: a stored, live session when
    /// there is one, otherwise the anonymous session carrying that id. Ids
    /// that are not UUIDs yield `None`.
    pub async fn resume_session(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>> {
        if let Some(session) = self.resolve_session(session_id).await? {
            return Ok(Some(session));
        }
        Ok(Uuid::parse_str(session_id)
            .ok()
            .map(|_| self.anonymous_session(session_id.to_owned())))
    }

    fn anonymous_session(&self, id: String) -> AdminSession {
        let now = self.clock.now();
        AdminSession {
            id,
            authenticated: false,
            created_at: now,
            expires_at: now + self.settings.session_ttl,
        }
    }

    pub(super) async fn open_session(&self) -> ApplicationResult<AdminSession> {
        let now = self.clock.now();
        let session = AdminSession {
            id: Uuid::new_v4().to_string(),
            authenticated: true,
            created_at: now,
            expires_at: now + self.settings.session_ttl,
        };
        self.sessions.insert(session.clone()).await?;
        Ok(session)
    }

    /// Look up a live session. Expired sessions are dropped from the store.
    async fn resolve_session(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>> {
        let Some(session) = self.sessions.get(session_id).await? else {
            return Ok(None);
        };
        if session.is_expired(self.clock.now()) {
            self.sessions.remove(session_id).await?;
            tracing::debug!("expired admin session discarded");
            return Ok(None);
        }
        Ok(Some(session))
    }

    pub fn csrf_token(&self, session: &AdminSession) -> String {
        self.csrf.issue(&session.id)
    }

    pub fn verify_csrf(&self, session: &AdminSession, token: Option<&str>) -> ApplicationResult<()> {
        match token {
            Some(token) if self.csrf.verify(&session.id, token) => Ok(()),
            _ => Err(ApplicationError::forbidden("invalid or missing csrf token")),
        }
    }
}
