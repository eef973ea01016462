use std::sync::Arc;

use crate::{application::ports::render::MarkdownRenderer, domain::article::ArticleRepository};

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) renderer: Arc<dyn MarkdownRenderer>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self { repo, renderer }
    }

    pub fn render_markdown(&self, markdown: &str) -> String {
        self.renderer.render(markdown)
    }
}
