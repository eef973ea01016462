// tests/support/helpers.rs
use super::mocks::{
    ADMIN_PASSWORD, ADMIN_PASSWORD_HASH, CountingSessionStore, PlainPasswordHasher, SteppingClock,
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, Response, StatusCode, header},
};
use pressroom::application::{
    commands::{articles::ArticleSettings, auth::AuthSettings},
    ports::{session::SessionStore, time::Clock},
    services::{ApplicationServices, ServicePorts},
};
use pressroom::infrastructure::{
    markdown::SanitizingMarkdownRenderer,
    repositories::FileArticleRepository,
    security::{csrf::HmacCsrfProtector, session_store::InMemorySessionStore},
    util::DefaultSlugGenerator,
};
use pressroom::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};
use std::{path::Path, sync::Arc};
use tempfile::TempDir;
use tower::util::ServiceExt as _;

pub fn build_services(
    root: &Path,
    clock: Arc<dyn Clock>,
) -> (Arc<ApplicationServices>, FileArticleRepository) {
    build_services_with_sessions(root, clock, Arc::new(InMemorySessionStore::new()))
}

pub fn build_services_with_sessions(
    root: &Path,
    clock: Arc<dyn Clock>,
    sessions: Arc<dyn SessionStore>,
) -> (Arc<ApplicationServices>, FileArticleRepository) {
    let repo = FileArticleRepository::new(root, Arc::clone(&clock));
    let services = ApplicationServices::new(
        ServicePorts {
            article_repo: Arc::new(repo.clone()),
            renderer: Arc::new(SanitizingMarkdownRenderer::new()),
            password_hasher: Arc::new(PlainPasswordHasher),
            sessions,
            csrf: Arc::new(HmacCsrfProtector::new("test-secret")),
            clock,
            slugger: Arc::new(DefaultSlugGenerator),
        },
        ArticleSettings::default(),
        AuthSettings {
            admin_password_hash: Some(ADMIN_PASSWORD_HASH.into()),
            ..AuthSettings::default()
        },
    );
    (Arc::new(services), repo)
}

/// A router over a private temporary article directory.
pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub repo: FileArticleRepository,
    pub sessions: Arc<CountingSessionStore>,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let sessions = Arc::new(CountingSessionStore::default());
        let (services, repo) = build_services_with_sessions(
            dir.path(),
            Arc::new(SteppingClock::default()),
            Arc::clone(&sessions) as Arc<dyn SessionStore>,
        );
        let state = HttpState {
            services: Arc::clone(&services),
            settings: HttpSettings {
                static_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
                ..HttpSettings::default()
            },
        };
        Self {
            router: build_router_with_rate_limiter(state, false),
            services,
            repo,
            sessions,
            _dir: dir,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.expect("router is infallible")
    }

    /// Log in through the form and return a client holding the
    /// authenticated cookie and its CSRF token.
    pub async fn login(&self) -> AdminClient {
        let resp = self.send(get("/admin/login", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let anonymous = session_cookie(&resp).expect("anonymous session cookie");
        let csrf = csrf_token(&body_text(resp).await).expect("csrf token on login page");

        let resp = self
            .send(post_form(
                "/admin/login",
                Some(&anonymous),
                &[("csrf_token", csrf.as_str()), ("password", ADMIN_PASSWORD)],
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp).as_deref(), Some("/admin"));
        let cookie = session_cookie(&resp).expect("authenticated session cookie");

        let resp = self.send(get("/admin", Some(&cookie))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let csrf = csrf_token(&body_text(resp).await).expect("csrf token on dashboard");

        AdminClient { cookie, csrf }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AdminClient {
    /// `pressroom_session=<id>`, ready for a `Cookie` header.
    pub cookie: String,
    pub csrf: String,
}

impl AdminClient {
    pub fn get(&self, uri: &str) -> Request<Body> {
        get(uri, Some(&self.cookie))
    }

    /// POST a form with the CSRF token added.
    pub fn post(&self, uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
        let mut all = vec![("csrf_token", self.csrf.as_str())];
        all.extend_from_slice(fields);
        post_form(uri, Some(&self.cookie), &all)
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` of the session cookie set by the response, if any.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("pressroom_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// First hidden `csrf_token` value in an HTML page.
pub fn csrf_token(html: &str) -> Option<String> {
    let marker = "name=\"csrf_token\" value=\"";
    let start = html.find(marker)? + marker.len();
    let end = html[start..].find('"')?;
    Some(html[start..start + end].to_string())
}
