// src/domain/article/entity.rs
use crate::domain::article::validation::{ArticleLimits, FieldsRef, validate_fields};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, SubsecRound, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The admin-editable part of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
}

impl ArticleFields {
    pub fn view(&self) -> FieldsRef<'_> {
        FieldsRef {
            title: &self.title,
            content: &self.content,
            excerpt: self.excerpt.as_deref(),
            tags: &self.tags,
        }
    }

    pub fn validate(&self, limits: &ArticleLimits) -> DomainResult<()> {
        validate_fields(self.view(), limits).map_err(DomainError::Validation)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub fields: ArticleFields,
    pub author: String,
    pub published: bool,
    pub now: DateTime<Utc>,
}

/// Timestamps are stored with microsecond precision.
pub fn wire_precision(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}

impl Article {
    pub fn new(new: NewArticle) -> Self {
        let NewArticle {
            slug,
            fields,
            author,
            published,
            now,
        } = new;
        let now = wire_precision(now);
        Self {
            slug,
            title: fields.title,
            content: fields.content,
            excerpt: fields.excerpt,
            author,
            published,
            tags: fields.tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fields(&self) -> ArticleFields {
        ArticleFields {
            title: self.title.clone(),
            content: self.content.clone(),
            excerpt: self.excerpt.clone(),
            tags: self.tags.clone(),
        }
    }

    pub fn publish(&mut self) {
        self.published = true;
    }

    pub fn unpublish(&mut self) {
        self.published = false;
    }

    pub fn revise(&mut self, fields: ArticleFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.excerpt = fields.excerpt;
        self.tags = fields.tags;
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn rename(&mut self, slug: ArticleSlug) {
        self.slug = slug;
    }

    /// Refresh `updated_at`. The new value is always later than the previous
    /// one, even when the clock has not moved past it.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let now = wire_precision(now);
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}
