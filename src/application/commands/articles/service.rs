// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        article::{
            ArticleFields, ArticleLimits, ArticleRepository, ArticleSlug,
            validation::{MAX_SLUG_LEN, validate_fields, validate_slug},
        },
        errors::{DomainError, Violations},
    },
};

/// Values the command service needs from configuration.
#[derive(Debug, Clone)]
pub struct ArticleSettings {
    pub limits: ArticleLimits,
    pub default_author: String,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self {
            limits: ArticleLimits::default(),
            default_author: "Admin".into(),
        }
    }
}

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: ArticleSettings,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        settings: ArticleSettings,
    ) -> Self {
        Self {
            repo,
            slugger,
            clock,
            settings,
        }
    }

    /// Check the explicit slug (if any) and every field, reporting all
    /// violations together.
    pub(super) fn validate_submission(
        &self,
        slug: Option<&str>,
        fields: &ArticleFields,
    ) -> ApplicationResult<Option<ArticleSlug>> {
        let mut violations: Violations = validate_fields(fields.view(), &self.settings.limits)
            .err()
            .unwrap_or_default();

        if let Some(Err(found)) = slug.map(validate_slug) {
            violations.extend(found);
        }

        if !violations.is_empty() {
            return Err(DomainError::Validation(violations).into());
        }

        Ok(slug.map(ArticleSlug::new).transpose()?)
    }

    pub(super) fn derive_slug(&self, title: &str) -> ApplicationResult<ArticleSlug> {
        let mut candidate = self.slugger.slugify(title);
        if candidate.len() > MAX_SLUG_LEN {
            candidate.truncate(MAX_SLUG_LEN);
            candidate.truncate(candidate.trim_end_matches('-').len());
        }
        if candidate.is_empty() {
            return Err(ApplicationError::validation(
                "slug could not be derived from the title; provide one explicitly",
            ));
        }
        Ok(ArticleSlug::new(candidate)?)
    }

    pub(super) fn parse_target(slug: &str) -> ApplicationResult<ArticleSlug> {
        Ok(ArticleSlug::new(slug)?)
    }

    pub(super) async fn ensure_vacant(&self, slug: &ArticleSlug) -> ApplicationResult<()> {
        if self.repo.exists(slug).await? {
            return Err(DomainError::SlugCollision(slug.to_string()).into());
        }
        Ok(())
    }
}
