// tests/e2e_admin.rs
use axum::http::{StatusCode, header};
use pressroom::application::queries::articles::GetArticleBySlugQuery;

mod support;

use support::{
    TestApp, body_text, csrf_token, get, location, post_form, session_cookie,
};

fn article_fields<'a>(title: &'a str, content: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![("title", title), ("content", content), ("tags", "Rust, web")]
}

#[tokio::test]
async fn admin_pages_redirect_anonymous_visitors_to_login() {
    let app = TestApp::new();
    for uri in ["/admin", "/admin/articles/new", "/admin/articles/anything/edit"] {
        let resp = app.send(get(uri, None)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp).as_deref(), Some("/admin/login"));
    }
}

#[tokio::test]
async fn login_page_sets_session_cookie_with_security_attributes() {
    let app = TestApp::new();
    let resp = app.send(get("/admin/login", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("pressroom_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(csrf_token(&body_text(resp).await).is_some());
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = TestApp::new();
    let resp = app.send(get("/admin/login", None)).await;
    let cookie = session_cookie(&resp).unwrap();
    let csrf = csrf_token(&body_text(resp).await).unwrap();

    let resp = app
        .send(post_form(
            "/admin/login",
            Some(&cookie),
            &[("csrf_token", csrf.as_str()), ("password", "guess")],
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(resp).await.contains("Invalid password."));

    let resp = app.send(get("/admin", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn login_without_valid_csrf_token_is_forbidden() {
    let app = TestApp::new();
    let resp = app.send(get("/admin/login", None)).await;
    let cookie = session_cookie(&resp).unwrap();

    let resp = app
        .send(post_form(
            "/admin/login",
            Some(&cookie),
            &[("csrf_token", "forged"), ("password", support::ADMIN_PASSWORD)],
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn login_rotates_the_session_id() {
    let app = TestApp::new();
    let resp = app.send(get("/admin/login", None)).await;
    let anonymous = session_cookie(&resp).unwrap();

    let admin = app.login().await;
    assert_ne!(admin.cookie, anonymous);

    let resp = app.send(admin.get("/admin/login")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/admin"));
}

#[tokio::test]
async fn create_publish_edit_and_delete_an_article() {
    let app = TestApp::new();
    let admin = app.login().await;

    let resp = app.send(admin.get("/admin/articles/new")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .send(admin.post(
            "/admin/articles/new",
            &article_fields("Hello World!", "First post body, long enough."),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/admin"));

    let dashboard = body_text(app.send(admin.get("/admin")).await).await;
    assert!(dashboard.contains("Hello World!"));
    assert!(dashboard.contains("hello-world"));
    assert!(dashboard.contains("draft"));

    // draft stays hidden from guests
    let resp = app.send(get("/articles/hello-world", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .send(admin.post("/admin/articles/hello-world/publish", &[]))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = app.send(get("/articles/hello-world", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.send(admin.get("/admin/articles/hello-world/edit")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("First post body, long enough."));

    let mut fields = article_fields("Hello again", "Edited body, still long enough.");
    fields.push(("slug", "hello-world"));
    let resp = app
        .send(admin.post("/admin/articles/hello-world/edit", &fields))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = app
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "hello-world".into(),
            include_drafts: true,
        })
        .await
        .unwrap();
    assert_eq!(stored.title, "Hello again");
    assert_eq!(stored.tags, vec!["rust", "web"]);
    assert!(stored.published);
    assert!(stored.updated_at > stored.created_at);

    let resp = app
        .send(admin.post("/admin/articles/hello-world/unpublish", &[]))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = app.send(get("/articles/hello-world", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .send(admin.post("/admin/articles/hello-world/delete", &[]))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    // deleting again is harmless
    let resp = app
        .send(admin.post("/admin/articles/hello-world/delete", &[]))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(!app.repo.root().join("hello-world.json").exists());
}

#[tokio::test]
async fn invalid_submission_re_renders_form_with_every_violation() {
    let app = TestApp::new();
    let admin = app.login().await;

    let resp = app
        .send(admin.post(
            "/admin/articles/new",
            &[("title", ""), ("content", "short"), ("slug", "Bad Slug!")],
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("title is required"));
    assert!(html.contains("content must be at least"));
    assert!(html.contains("slug may only contain"));
    // submitted values are echoed back
    assert!(html.contains("Bad Slug!"));
    assert!(std::fs::read_dir(app.repo.root()).unwrap().next().is_none());
}

#[tokio::test]
async fn slug_collision_re_renders_form_with_conflict() {
    let app = TestApp::new();
    let admin = app.login().await;
    let mut fields = article_fields("Foo", "Original content here.");
    fields.push(("slug", "foo"));

    let resp = app.send(admin.post("/admin/articles/new", &fields)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = app.send(admin.post("/admin/articles/new", &fields)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(body_text(resp).await.contains("slug already in use: foo"));
}

#[tokio::test]
async fn admin_posts_without_csrf_token_are_forbidden() {
    let app = TestApp::new();
    let admin = app.login().await;

    let resp = app
        .send(post_form(
            "/admin/articles/new",
            Some(&admin.cookie),
            &article_fields("No token", "Body that is long enough."),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(std::fs::read_dir(app.repo.root()).unwrap().next().is_none());
}

#[tokio::test]
async fn editing_a_missing_article_is_not_found() {
    let app = TestApp::new();
    let admin = app.login().await;

    let resp = app.send(admin.get("/admin/articles/missing-post/edit")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .send(admin.post(
            "/admin/articles/missing-post/edit",
            &article_fields("Missing", "Body that is long enough."),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::new();
    let admin = app.login().await;

    let resp = app.send(admin.post("/admin/logout", &[])).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/admin/login"));
    let cleared = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));

    let resp = app.send(admin.get("/admin")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/admin/login"));
}

#[tokio::test]
async fn anonymous_visits_do_not_store_sessions() {
    let app = TestApp::new();
    for _ in 0..200 {
        let resp = app.send(get("/admin/login", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_some());
    }
    assert_eq!(app.sessions.inserts(), 0);

    app.login().await;
    assert_eq!(app.sessions.inserts(), 1);
}

#[tokio::test]
async fn anonymous_cookie_keeps_its_csrf_token_across_requests() {
    let app = TestApp::new();
    let resp = app.send(get("/admin/login", None)).await;
    let cookie = session_cookie(&resp).unwrap();
    let first = csrf_token(&body_text(resp).await).unwrap();

    let resp = app.send(get("/admin/login", Some(&cookie))).await;
    assert!(session_cookie(&resp).is_none());
    let second = csrf_token(&body_text(resp).await).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn malformed_session_cookie_is_replaced() {
    let app = TestApp::new();
    let resp = app
        .send(get("/admin/login", Some("pressroom_session=not-a-session")))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp).expect("fresh session cookie");
    assert_ne!(cookie, "pressroom_session=not-a-session");
}
