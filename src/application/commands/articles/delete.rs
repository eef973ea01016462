// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::ApplicationResult;

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Remove the article. Returns whether a record existed; absent slugs are a no-op.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<bool> {
        let slug = Self::parse_target(&command.slug)?;
        let removed = self.repo.delete(&slug).await?;
        if removed {
            tracing::info!(slug = %slug, "article deleted");
        } else {
            tracing::debug!(slug = %slug, "delete of absent article ignored");
        }
        Ok(removed)
    }
}
