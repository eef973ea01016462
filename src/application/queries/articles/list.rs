use std::{cmp::Ordering, str::FromStr};

use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::Article,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleSortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Slug,
}

impl ArticleSortKey {
    fn compare(self, a: &Article, b: &Article) -> Ordering {
        match self {
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::Slug => a.slug.cmp(&b.slug),
        }
    }
}

impl FromStr for ArticleSortKey {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "slug" => Ok(Self::Slug),
            other => Err(ApplicationError::validation(format!(
                "invalid sort key `{other}`; expected created_at, updated_at, title, or slug"
            ))),
        }
    }
}

pub struct ListArticlesQuery {
    pub sort_by: ArticleSortKey,
    pub descending: bool,
    pub include_drafts: bool,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            sort_by: ArticleSortKey::CreatedAt,
            descending: true,
            include_drafts: false,
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let mut articles = if query.include_drafts {
            self.repo.all().await?
        } else {
            self.repo.published_only().await?
        };

        // stable sort keeps the repository's slug tie-break
        articles.sort_by(|a, b| {
            let ord = query.sort_by.compare(a, b);
            if query.descending { ord.reverse() } else { ord }
        });

        Ok(articles.into_iter().map(Into::into).collect())
    }
}
