// src/presentation/http/templates.rs
use crate::presentation::http::views::{ArticleFormView, ArticleSummary, ArticleView};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "guest/index.html")]
pub struct IndexPage {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Template)]
#[template(path = "guest/article.html")]
pub struct ArticlePage {
    pub article: ArticleView,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginPage {
    pub csrf_token: String,
    pub error: String,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardPage {
    pub csrf_token: String,
    pub articles: Vec<ArticleSummary>,
}

#[derive(Template)]
#[template(path = "admin/article_form.html")]
pub struct ArticleFormPage {
    pub csrf_token: String,
    pub heading: String,
    pub action: String,
    pub is_new: bool,
    pub form: ArticleFormView,
    pub errors: Vec<String>,
}

pub fn render(page: &impl Template) -> Response {
    render_with_status(StatusCode::OK, page)
}

pub fn render_with_status(status: StatusCode, page: &impl Template) -> Response {
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template rendering failed").into_response()
        }
    }
}
