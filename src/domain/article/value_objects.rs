use crate::domain::article::validation::validate_slug;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Validated slug. Safe to use verbatim as a filename stem: the grammar has no
/// separators, dots, or empty form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        validate_slug(&value).map_err(DomainError::Validation)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Name of the record file backing this slug.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

impl AsRef<str> for ArticleSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_hyphenated() {
        let slug = ArticleSlug::new("hello-world-2").unwrap();
        assert_eq!(slug.as_str(), "hello-world-2");
        assert_eq!(slug.file_name(), "hello-world-2.json");
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for bad in ["", "../etc", "a/b", "..", "a\\b", "Upper", "with space", "-lead", "trail-", "a--b"] {
            assert!(
                matches!(ArticleSlug::new(bad), Err(DomainError::Validation(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
