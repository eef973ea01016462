// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, ArticleInput},
    error::{ApplicationError, ApplicationResult},
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub input: ArticleInput,
}

impl ArticleCommandService {
    /// Replace the editable fields of an existing article. `created_at` is kept;
    /// a different explicit slug moves the record.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { slug, input } = command;
        let current_slug = Self::parse_target(&slug)?;
        let fields = input.fields();
        let requested_slug = self.validate_submission(input.slug.as_deref(), &fields)?;

        let mut article = self
            .repo
            .load(&current_slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(slug))?;

        article.revise(fields);
        if let Some(author) = input.author {
            article.set_author(author);
        }
        match input.published {
            Some(true) => article.publish(),
            Some(false) => article.unpublish(),
            None => {}
        }

        let Some(target) = requested_slug.filter(|s| *s != current_slug) else {
            let saved = self.repo.save(&article).await?;
            tracing::info!(slug = %saved.slug, "article updated");
            return Ok(saved.into());
        };

        self.ensure_vacant(&target).await?;
        article.rename(target);
        let saved = self.repo.save(&article).await?;
        self.repo.delete(&current_slug).await?;
        tracing::info!(from = %current_slug, to = %saved.slug, "article renamed");
        Ok(saved.into())
    }
}
