// src/infrastructure/repositories/record.rs
use crate::application::dto::serde_time;
use crate::domain::article::{Article, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk JSON shape of one article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.to_string(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            author: Some(article.author.clone()),
            tags: article.tags.clone(),
            published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl ArticleRecord {
    /// Convert a record read from `<expected>.json`. Records without an author
    /// take `default_author`; blank excerpts read as absent.
    pub fn into_article(self, expected: &ArticleSlug, default_author: &str) -> DomainResult<Article> {
        if self.slug != expected.as_str() {
            return Err(DomainError::corrupt(
                expected.as_str(),
                format!("record names slug `{}`", self.slug),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::corrupt(expected.as_str(), "title is empty"));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::corrupt(expected.as_str(), "content is empty"));
        }

        Ok(Article {
            slug: expected.clone(),
            title: self.title,
            content: self.content,
            excerpt: self.excerpt.filter(|e| !e.trim().is_empty()),
            author: self
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| default_author.to_string()),
            published: self.published,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
