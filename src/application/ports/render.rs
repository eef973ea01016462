// src/application/ports/render.rs
pub trait MarkdownRenderer: Send + Sync {
    /// Convert Markdown into HTML that is safe to embed in a page as-is.
    fn render(&self, markdown: &str) -> String;
}
