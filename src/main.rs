// src/main.rs
use anyhow::Result;
use pressroom::application::{
    ports::{
        render::MarkdownRenderer,
        security::{CsrfProtector, PasswordHasher},
        session::SessionStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServicePorts},
};
use pressroom::config::AppConfig;
use pressroom::domain::article::ArticleRepository;
use pressroom::infrastructure::{
    markdown::SanitizingMarkdownRenderer,
    repositories::FileArticleRepository,
    security::{
        csrf::HmacCsrfProtector, password::Argon2PasswordHasher,
        session_store::InMemorySessionStore,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use pressroom::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repo = FileArticleRepository::with_default_author(
        config.articles_dir().clone(),
        Arc::clone(&clock),
        config.default_author(),
    );
    repo.ensure_root()?;
    tracing::info!(dir = %repo.root().display(), "article storage ready");

    let article_repo: Arc<dyn ArticleRepository> = Arc::new(repo);
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(SanitizingMarkdownRenderer::new());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let csrf: Arc<dyn CsrfProtector> = Arc::new(HmacCsrfProtector::new(config.secret_key()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let auth_settings = config.auth_settings()?;
    if auth_settings.admin_password_hash.is_none() {
        tracing::warn!("ADMIN_PASSWORD_HASH not set; admin login is disabled");
    }

    let services = Arc::new(ApplicationServices::new(
        ServicePorts {
            article_repo,
            renderer,
            password_hasher,
            sessions,
            csrf,
            clock,
            slugger,
        },
        config.article_settings(),
        auth_settings,
    ));

    let state = HttpState {
        services,
        settings: HttpSettings {
            secure_cookies: config.is_production(),
            ..HttpSettings::default()
        },
    };

    let app = build_router_with_rate_limiter(state, config.login_rate_limit());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
