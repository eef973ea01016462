// tests/support/builders.rs
use pressroom::application::dto::ArticleInput;

pub struct ArticleInputBuilder {
    input: ArticleInput,
}

impl ArticleInputBuilder {
    pub fn new() -> Self {
        Self {
            input: ArticleInput {
                slug: None,
                title: "Test Article".into(),
                content: "Some markdown body that is long enough.".into(),
                excerpt: None,
                tags: Vec::new(),
                author: None,
                published: None,
            },
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.input.slug = Some(slug.into());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.input.title = title.into();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.input.content = content.into();
        self
    }

    pub fn excerpt(mut self, excerpt: &str) -> Self {
        self.input.excerpt = Some(excerpt.into());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.input.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.input.author = Some(author.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.input.published = Some(published);
        self
    }

    pub fn build(self) -> ArticleInput {
        self.input
    }
}

impl Default for ArticleInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}
