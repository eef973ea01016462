// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::{ArticleCommandService, ArticleSettings},
            auth::{AdminAuthService, AuthSettings},
        },
        ports::{
            render::MarkdownRenderer,
            security::{CsrfProtector, PasswordHasher},
            session::SessionStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::articles::ArticleQueryService,
    },
    domain::article::ArticleRepository,
};

/// Adapters handed to [`ApplicationServices::new`].
pub struct ServicePorts {
    pub article_repo: Arc<dyn ArticleRepository>,
    pub renderer: Arc<dyn MarkdownRenderer>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub sessions: Arc<dyn SessionStore>,
    pub csrf: Arc<dyn CsrfProtector>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub auth: Arc<AdminAuthService>,
}

impl ApplicationServices {
    pub fn new(ports: ServicePorts, articles: ArticleSettings, auth: AuthSettings) -> Self {
        let ServicePorts {
            article_repo,
            renderer,
            password_hasher,
            sessions,
            csrf,
            clock,
            slugger,
        } = ports;

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            slugger,
            Arc::clone(&clock),
            articles,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(article_repo, renderer));

        let auth = Arc::new(AdminAuthService::new(
            password_hasher,
            sessions,
            csrf,
            clock,
            auth,
        ));

        Self {
            article_commands,
            article_queries,
            auth,
        }
    }
}
