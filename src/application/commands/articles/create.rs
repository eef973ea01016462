// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleInput},
        error::ApplicationResult,
    },
    domain::article::{Article, NewArticle},
};

pub struct CreateArticleCommand {
    pub input: ArticleInput,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand { input } = command;
        let fields = input.fields();

        let slug = match self.validate_submission(input.slug.as_deref(), &fields)? {
            Some(explicit) => explicit,
            None => self.derive_slug(&fields.title)?,
        };
        self.ensure_vacant(&slug).await?;

        let article = Article::new(NewArticle {
            slug,
            fields,
            author: input
                .author
                .unwrap_or_else(|| self.settings.default_author.clone()),
            published: input.published.unwrap_or(false),
            now: self.clock.now(),
        });

        let saved = self.repo.save(&article).await?;
        tracing::info!(slug = %saved.slug, published = saved.published, "article created");
        Ok(saved.into())
    }
}
