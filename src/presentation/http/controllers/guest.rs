// src/presentation/http/controllers/guest.rs
use crate::application::queries::articles::{GetArticleBySlugQuery, ListArticlesQuery};
use crate::presentation::http::{
    error::{IntoPageResult, PageResult},
    state::HttpState,
    templates::{ArticlePage, IndexPage, render},
};
use axum::{Extension, extract::Path, response::Response};

pub async fn index(Extension(state): Extension<HttpState>) -> PageResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .into_page()?;

    Ok(render(&IndexPage {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

/// Drafts and unknown slugs both answer 404.
pub async fn show_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> PageResult<Response> {
    let rendered = state
        .services
        .article_queries
        .render_article(GetArticleBySlugQuery {
            slug,
            include_drafts: false,
        })
        .await
        .into_page()?;

    Ok(render(&ArticlePage {
        article: rendered.into(),
    }))
}
