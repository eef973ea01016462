mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ArticleSortKey, ListArticlesQuery};
pub use service::ArticleQueryService;
