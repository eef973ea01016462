// src/domain/article/repository.rs
use crate::domain::article::{entity::Article, value_objects::ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage for articles keyed by slug.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Persist the article, refreshing `updated_at`. Returns the stored value.
    async fn save(&self, article: &Article) -> DomainResult<Article>;
    /// `Ok(None)` when no record exists for the slug.
    async fn load(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    /// Returns whether a record was removed. Absent slugs are not an error.
    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    /// Every readable record, newest `created_at` first. Unreadable records are skipped.
    async fn all(&self) -> DomainResult<Vec<Article>>;

    async fn published_only(&self) -> DomainResult<Vec<Article>> {
        let articles = self.all().await?;
        Ok(articles.into_iter().filter(|a| a.published).collect())
    }
}
