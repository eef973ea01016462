//! Markdown rendering followed by allow-list sanitisation.

use crate::application::ports::render::MarkdownRenderer;
use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{Event, Options, Parser, html};
use std::{borrow::Cow, collections::HashSet};

const ALLOWED_TAGS: &[&str] = &[
    "a", "blockquote", "br", "code", "del", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "img", "li", "ol", "p", "pre", "strong", "sup", "table", "tbody", "td", "th", "thead", "tr",
    "ul", "div", "section", "span", "input",
];

const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Namespace for ids coming from article HTML, kept apart from the page's own.
const ID_PREFIX: &str = "user-content-";

/// In-page links follow their targets into the prefixed id namespace.
fn prefix_fragment(url: &str) -> Option<Cow<'_, str>> {
    match url.strip_prefix('#') {
        Some(fragment) if !fragment.starts_with(ID_PREFIX) => {
            Some(Cow::Owned(format!("#{ID_PREFIX}{fragment}")))
        }
        _ => Some(Cow::Borrowed(url)),
    }
}

/// pulldown-cmark for conversion, ammonia as the security boundary.
pub struct SanitizingMarkdownRenderer {
    options: Options,
    sanitizer: Builder<'static>,
}

impl Default for SanitizingMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SanitizingMarkdownRenderer {
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_TASKLISTS;

        let mut sanitizer = Builder::empty();
        sanitizer
            .add_tags(ALLOWED_TAGS)
            .add_generic_attributes(&["title"])
            .add_tag_attributes("a", &["href"])
            .add_tag_attributes("img", &["src", "alt"])
            .add_tag_attributes("code", &["class"])
            .add_tag_attributes("ol", &["start"])
            .add_tag_attributes("div", &["class", "id"])
            .add_tag_attributes("sup", &["class", "id"])
            .add_tag_attributes("input", &["type", "checked", "disabled"])
            .url_schemes(URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
            .url_relative(UrlRelative::Custom(Box::new(prefix_fragment)))
            .id_prefix(Some(ID_PREFIX))
            .link_rel(Some("noopener noreferrer nofollow"))
            .clean_content_tags(HashSet::from(["script", "style"]))
            .strip_comments(true);

        Self { options, sanitizer }
    }

    /// Stage one: Markdown to unsanitised HTML. Single newlines become `<br>`.
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl MarkdownRenderer for SanitizingMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let raw = self.to_html(markdown);
        self.sanitizer.clean(&raw).to_string()
    }
}
