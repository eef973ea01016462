// src/presentation/http/views.rs
//! Template-facing shapes. Dates are preformatted and optional text is
//! flattened to empty strings so templates stay logic-free.
use crate::application::dto::{ArticleDto, RawArticleFields, RenderedArticleDto};
use chrono::{DateTime, Utc};

pub fn display_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
    pub created: String,
    pub updated: String,
}

impl From<ArticleDto> for ArticleSummary {
    fn from(dto: ArticleDto) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            excerpt: dto.excerpt.unwrap_or_default(),
            author: dto.author,
            published: dto.published,
            tags: dto.tags,
            created: display_date(dto.created_at),
            updated: display_date(dto.updated_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleView {
    pub summary: ArticleSummary,
    /// Already sanitised.
    pub html: String,
}

impl From<RenderedArticleDto> for ArticleView {
    fn from(rendered: RenderedArticleDto) -> Self {
        Self {
            summary: rendered.article.into(),
            html: rendered.html,
        }
    }
}

/// Values echoed back into the article form.
#[derive(Debug, Clone, Default)]
pub struct ArticleFormView {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: String,
    pub author: String,
    pub published: bool,
}

impl From<ArticleDto> for ArticleFormView {
    fn from(dto: ArticleDto) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            content: dto.content,
            excerpt: dto.excerpt.unwrap_or_default(),
            tags: dto.tags.join(", "),
            author: dto.author,
            published: dto.published,
        }
    }
}

impl From<&RawArticleFields> for ArticleFormView {
    fn from(raw: &RawArticleFields) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            slug: text(&raw.slug),
            title: text(&raw.title),
            content: text(&raw.content),
            excerpt: text(&raw.excerpt),
            tags: text(&raw.tags),
            author: text(&raw.author),
            published: raw
                .published
                .as_deref()
                .is_some_and(|v| matches!(v, "on" | "true" | "1" | "yes")),
        }
    }
}
