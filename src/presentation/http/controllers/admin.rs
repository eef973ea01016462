// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        articles::{
            CreateArticleCommand, DeleteArticleCommand, SetPublishStateCommand,
            UpdateArticleCommand,
        },
        auth::{LoginCommand, LogoutCommand},
    },
    dto::{AdminSession, RawArticleFields},
    error::ApplicationError,
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::domain::errors::DomainError;
use crate::presentation::http::{
    error::{IntoPageResult, LOGIN_PATH, PageError, PageResult},
    extractors::{CurrentSession, RequireAdmin},
    middleware::session::{expired_session_cookie, session_cookie},
    state::HttpState,
    templates::{ArticleFormPage, DashboardPage, LoginPage, render, render_with_status},
    views::ArticleFormView,
};
use axum::{
    Extension, Form,
    extract::Path,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

const DASHBOARD_PATH: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub password: String,
}

/// Body of the action buttons (publish, unpublish, delete, logout).
#[derive(Debug, Deserialize)]
pub struct CsrfForm {
    #[serde(default)]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

impl ArticleForm {
    fn into_parts(self) -> (Option<String>, RawArticleFields) {
        let raw = RawArticleFields {
            slug: self.slug,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            tags: self.tags,
            author: self.author,
            published: self.published,
        };
        (self.csrf_token, raw)
    }
}

fn edit_path(slug: &str) -> String {
    format!("/admin/articles/{slug}/edit")
}

fn verify_csrf(state: &HttpState, session: &AdminSession, token: Option<&str>) -> PageResult<()> {
    state.services.auth.verify_csrf(session, token).into_page()
}

/// Re-render the article form for submissions the service refused. Anything
/// other than a validation failure or a slug collision is a page error.
fn rejected_form(
    state: &HttpState,
    session: &AdminSession,
    target: FormTarget,
    raw: &RawArticleFields,
    err: ApplicationError,
) -> Response {
    let status = match &err {
        ApplicationError::Domain(DomainError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Domain(DomainError::SlugCollision(_)) => StatusCode::CONFLICT,
        _ => return PageError::from_error(err).into_response(),
    };
    let errors = match err.violations() {
        Some(violations) => violations.to_vec(),
        None => vec![err.to_string()],
    };
    let form = form_page(state, session, target, ArticleFormView::from(raw), errors);
    render_with_status(status, &form)
}

enum FormTarget {
    New,
    Edit(String),
}

fn form_page(
    state: &HttpState,
    session: &AdminSession,
    target: FormTarget,
    form: ArticleFormView,
    errors: Vec<String>,
) -> ArticleFormPage {
    let (heading, action, is_new) = match target {
        FormTarget::New => ("New article".to_string(), "/admin/articles/new".to_string(), true),
        FormTarget::Edit(slug) => (format!("Edit {slug}"), edit_path(&slug), false),
    };
    ArticleFormPage {
        csrf_token: state.services.auth.csrf_token(session),
        heading,
        action,
        is_new,
        form,
        errors,
    }
}

pub async fn login_form(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    if session.authenticated {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    render(&LoginPage {
        csrf_token: state.services.auth.csrf_token(&session),
        error: String::new(),
    })
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Form(form): Form<LoginForm>,
) -> PageResult<Response> {
    let result = state
        .services
        .auth
        .login(LoginCommand {
            session: session.clone(),
            csrf_token: form.csrf_token,
            password: form.password,
        })
        .await;

    match result {
        Ok(authenticated) => {
            let cookie = session_cookie(&authenticated, state.settings.secure_cookies).into_page()?;
            Ok(([(SET_COOKIE, cookie)], Redirect::to(DASHBOARD_PATH)).into_response())
        }
        Err(ApplicationError::Unauthorized(_)) => {
            let page = LoginPage {
                csrf_token: state.services.auth.csrf_token(&session),
                error: "Invalid password.".into(),
            };
            Ok(render_with_status(StatusCode::UNAUTHORIZED, &page))
        }
        Err(err) => Err(PageError::from_error(err)),
    }
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Form(form): Form<CsrfForm>,
) -> PageResult<Response> {
    state
        .services
        .auth
        .logout(LogoutCommand {
            session,
            csrf_token: form.csrf_token,
        })
        .await
        .into_page()?;

    let cookie = expired_session_cookie(state.settings.secure_cookies).into_page()?;
    Ok(([(SET_COOKIE, cookie)], Redirect::to(LOGIN_PATH)).into_response())
}

pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
) -> PageResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            include_drafts: true,
            ..ListArticlesQuery::default()
        })
        .await
        .into_page()?;

    Ok(render(&DashboardPage {
        csrf_token: state.services.auth.csrf_token(&session),
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
) -> Response {
    let page = form_page(
        &state,
        &session,
        FormTarget::New,
        ArticleFormView::default(),
        Vec::new(),
    );
    render(&page)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
    Form(form): Form<ArticleForm>,
) -> PageResult<Response> {
    let (csrf_token, raw) = form.into_parts();
    verify_csrf(&state, &session, csrf_token.as_deref())?;

    let result = state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            input: raw.clone().into(),
        })
        .await;

    Ok(match result {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(err) => rejected_form(&state, &session, FormTarget::New, &raw, err),
    })
}

pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
    Path(slug): Path<String>,
) -> PageResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: slug.clone(),
            include_drafts: true,
        })
        .await
        .into_page()?;

    let page = form_page(
        &state,
        &session,
        FormTarget::Edit(slug),
        article.into(),
        Vec::new(),
    );
    Ok(render(&page))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
    Path(slug): Path<String>,
    Form(form): Form<ArticleForm>,
) -> PageResult<Response> {
    let (csrf_token, raw) = form.into_parts();
    verify_csrf(&state, &session, csrf_token.as_deref())?;

    let result = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            slug: slug.clone(),
            input: raw.clone().into(),
        })
        .await;

    Ok(match result {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(err) => rejected_form(&state, &session, FormTarget::Edit(slug), &raw, err),
    })
}

async fn change_publish_state(
    state: HttpState,
    session: AdminSession,
    slug: String,
    form: CsrfForm,
    publish: bool,
) -> PageResult<Response> {
    verify_csrf(&state, &session, form.csrf_token.as_deref())?;
    state
        .services
        .article_commands
        .set_publish_state(SetPublishStateCommand { slug, publish })
        .await
        .into_page()?;
    Ok(Redirect::to(DASHBOARD_PATH).into_response())
}

pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
    Path(slug): Path<String>,
    Form(form): Form<CsrfForm>,
) -> PageResult<Response> {
    change_publish_state(state, session, slug, form, true).await
}

pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
    Path(slug): Path<String>,
    Form(form): Form<CsrfForm>,
) -> PageResult<Response> {
    change_publish_state(state, session, slug, form, false).await
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    RequireAdmin(session): RequireAdmin,
    Path(slug): Path<String>,
    Form(form): Form<CsrfForm>,
) -> PageResult<Response> {
    verify_csrf(&state, &session, form.csrf_token.as_deref())?;
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { slug })
        .await
        .into_page()?;
    Ok(Redirect::to(DASHBOARD_PATH).into_response())
}
