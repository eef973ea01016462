// src/application/commands/auth/logout.rs
use super::AdminAuthService;
use crate::application::{dto::AdminSession, error::ApplicationResult};

pub struct LogoutCommand {
    pub session: AdminSession,
    pub csrf_token: Option<String>,
}

impl AdminAuthService {
    pub async fn logout(&self, command: LogoutCommand) -> ApplicationResult<()> {
        self.verify_csrf(&command.session, command.csrf_token.as_deref())?;
        self.sessions.remove(&command.session.id).await?;
        tracing::info!("admin logged out");
        Ok(())
    }
}
