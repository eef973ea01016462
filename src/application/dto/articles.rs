// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleFields, validation::normalize_tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            slug: article.slug.into_inner(),
            title: article.title,
            content: article.content,
            excerpt: article.excerpt,
            author: article.author,
            published: article.published,
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// An article together with its sanitised HTML body.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedArticleDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub html: String,
}

/// Untyped submission as it arrives from a form or query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticleFields {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Comma-separated.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

/// Typed submission consumed by the command service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleInput {
    pub slug: Option<String>,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

impl ArticleInput {
    /// Editable fields with tags normalised.
    pub fn fields(&self) -> ArticleFields {
        ArticleFields {
            title: self.title.clone(),
            content: self.content.clone(),
            excerpt: self.excerpt.clone(),
            tags: normalize_tags(&self.tags),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl From<RawArticleFields> for ArticleInput {
    fn from(raw: RawArticleFields) -> Self {
        let tags = raw
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            slug: non_blank(raw.slug),
            title: raw.title.unwrap_or_default().trim().to_string(),
            content: raw.content.unwrap_or_default().trim().to_string(),
            excerpt: non_blank(raw.excerpt),
            tags,
            author: non_blank(raw.author),
            published: raw.published.as_deref().and_then(parse_flag),
        }
    }
}
