// src/infrastructure/repositories/mod.rs
mod error;
mod file_article;
mod record;

pub use file_article::FileArticleRepository;
pub use record::ArticleRecord;
