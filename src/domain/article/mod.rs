pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleFields, NewArticle};
pub use repository::ArticleRepository;
pub use validation::ArticleLimits;
pub use value_objects::ArticleSlug;
