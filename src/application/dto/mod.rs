pub mod articles;
pub mod serde_time;
pub mod sessions;

pub use articles::{ArticleDto, ArticleInput, RawArticleFields, RenderedArticleDto};
pub use sessions::AdminSession;
