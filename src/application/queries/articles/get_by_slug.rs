use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, RenderedArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleSlug},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

impl ArticleQueryService {
    async fn find_visible(&self, query: &GetArticleBySlugQuery) -> ApplicationResult<Article> {
        // a malformed slug cannot name a stored article
        let slug = ArticleSlug::new(query.slug.as_str())
            .map_err(|_| ApplicationError::not_found(query.slug.as_str()))?;

        let article = self
            .repo
            .load(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(query.slug.as_str()))?;

        if !article.published && !query.include_drafts {
            return Err(ApplicationError::not_found(query.slug.as_str()));
        }

        Ok(article)
    }

    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        self.find_visible(&query).await.map(Into::into)
    }

    pub async fn render_article(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<RenderedArticleDto> {
        let article = self.find_visible(&query).await?;
        let html = self.renderer.render(&article.content);
        Ok(RenderedArticleDto {
            article: article.into(),
            html,
        })
    }
}
