// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: HttpSettings,
}

/// Presentation-only knobs. Everything else lives in the services.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Adds `Secure` to the session cookie.
    pub secure_cookies: bool,
    pub static_dir: PathBuf,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            secure_cookies: false,
            static_dir: PathBuf::from("static"),
        }
    }
}
