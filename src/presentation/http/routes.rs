// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{admin, api, guest},
    middleware::{rate_limit::login_rate_limit_layer, session::load_session},
    state::HttpState,
};
use axum::{
    Extension, Router, middleware,
    routing::{MethodRouter, get, post},
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// `rate_limit` guards `POST /admin/login` per client IP. The limiter keys on
/// the peer address, so serve with `into_make_service_with_connect_info`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let static_files = ServeDir::new(&state.settings.static_dir);

    Router::new()
        .route("/", get(guest::index))
        .route("/articles/{slug}", get(guest::show_article))
        .route("/health", get(api::health))
        .route("/api/v1/articles", get(api::list_articles))
        .route("/api/v1/articles/{slug}", get(api::get_article))
        .merge(admin_router(rate_limit))
        .nest_service("/static", static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

fn admin_router(rate_limit: bool) -> Router {
    let login: MethodRouter = if rate_limit {
        get(admin::login_form).merge(post(admin::login).layer(login_rate_limit_layer()))
    } else {
        get(admin::login_form).post(admin::login)
    };

    Router::new()
        .route("/admin/login", login)
        .route("/admin/logout", post(admin::logout))
        .route("/admin", get(admin::dashboard))
        .route(
            "/admin/articles/new",
            get(admin::new_article_form).post(admin::create_article),
        )
        .route(
            "/admin/articles/{slug}/edit",
            get(admin::edit_article_form).post(admin::update_article),
        )
        .route("/admin/articles/{slug}/publish", post(admin::publish_article))
        .route(
            "/admin/articles/{slug}/unpublish",
            post(admin::unpublish_article),
        )
        .route("/admin/articles/{slug}/delete", post(admin::delete_article))
        .layer(middleware::from_fn(load_session))
}
