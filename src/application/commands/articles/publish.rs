// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct SetPublishStateCommand {
    pub slug: String,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = Self::parse_target(&command.slug)?;
        let mut article = self
            .repo
            .load(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(command.slug))?;

        if command.publish {
            article.publish();
        } else {
            article.unpublish();
        }

        let saved = self.repo.save(&article).await?;
        tracing::info!(slug = %saved.slug, published = saved.published, "publish state changed");
        Ok(saved.into())
    }
}
