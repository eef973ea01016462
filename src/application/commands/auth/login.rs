// src/application/commands/auth/login.rs
use super::AdminAuthService;
use crate::application::{
    dto::AdminSession,
    error::{ApplicationError, ApplicationResult},
};

pub struct LoginCommand {
    pub session: AdminSession,
    pub csrf_token: Option<String>,
    pub password: String,
}

impl AdminAuthService {
    /// Check the admin password and return a new authenticated session. The
    /// presented session is discarded so its id cannot be reused.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AdminSession> {
        let LoginCommand {
            session,
            csrf_token,
            password,
        } = command;
        self.verify_csrf(&session, csrf_token.as_deref())?;

        let expected = self
            .settings
            .admin_password_hash
            .as_deref()
            .ok_or_else(|| ApplicationError::infrastructure("admin password hash is not configured"))?;

        if let Err(err) = self.password_hasher.verify(&password, expected).await {
            tracing::warn!(error = %err, "admin login rejected");
            return Err(err);
        }

        self.sessions.remove(&session.id).await?;
        let authenticated = self.open_session().await?;
        tracing::info!("admin logged in");
        Ok(authenticated)
    }
}
