// src/presentation/http/controllers/api.rs
use crate::application::{
    dto::{ArticleDto, RenderedArticleDto},
    queries::articles::{ArticleSortKey, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};

fn default_descending() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default = "default_descending")]
    pub descending: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let sort_by = params
        .sort_by
        .as_deref()
        .map(str::parse::<ArticleSortKey>)
        .transpose()
        .into_http()?
        .unwrap_or_default();

    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            sort_by,
            descending: params.descending,
            include_drafts: false,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<RenderedArticleDto>> {
    state
        .services
        .article_queries
        .render_article(GetArticleBySlugQuery {
            slug,
            include_drafts: false,
        })
        .await
        .into_http()
        .map(Json)
}
