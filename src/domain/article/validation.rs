// src/domain/article/validation.rs
//! Field rules for article submissions. Every function is pure and reports
//! all violations it finds rather than stopping at the first.
use crate::domain::errors::Violations;
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_SLUG_LEN: usize = 100;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug pattern"));

/// Size limits applied to submissions. Supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleLimits {
    pub title_max: usize,
    pub excerpt_max: usize,
    pub content_min: usize,
    pub tags_max: usize,
    pub tag_max: usize,
}

impl Default for ArticleLimits {
    fn default() -> Self {
        Self {
            title_max: 200,
            excerpt_max: 500,
            content_min: 10,
            tags_max: 10,
            tag_max: 50,
        }
    }
}

/// Editable fields of an article after normalisation.
#[derive(Debug, Clone, Copy)]
pub struct FieldsRef<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
    pub tags: &'a [String],
}

pub fn validate_slug(slug: &str) -> Result<(), Violations> {
    if slug.is_empty() {
        return Err(vec!["slug is required".into()]);
    }
    let mut violations = Violations::new();
    if slug.chars().count() > MAX_SLUG_LEN {
        violations.push(format!("slug must be at most {MAX_SLUG_LEN} characters"));
    }
    if !SLUG_RE.is_match(slug) {
        violations.push(
            "slug may only contain lowercase letters, digits, and single hyphens between them"
                .into(),
        );
    }
    into_result(violations)
}

pub fn validate_title(title: &str, limits: &ArticleLimits) -> Result<(), Violations> {
    if title.trim().is_empty() {
        return Err(vec!["title is required".into()]);
    }
    if title.chars().count() > limits.title_max {
        return Err(vec![format!(
            "title must be at most {} characters",
            limits.title_max
        )]);
    }
    Ok(())
}

pub fn validate_content(content: &str, limits: &ArticleLimits) -> Result<(), Violations> {
    if content.trim().is_empty() {
        return Err(vec!["content is required".into()]);
    }
    if content.chars().count() < limits.content_min {
        return Err(vec![format!(
            "content must be at least {} characters",
            limits.content_min
        )]);
    }
    Ok(())
}

pub fn validate_excerpt(excerpt: Option<&str>, limits: &ArticleLimits) -> Result<(), Violations> {
    match excerpt {
        Some(text) if text.chars().count() > limits.excerpt_max => Err(vec![format!(
            "excerpt must be at most {} characters",
            limits.excerpt_max
        )]),
        _ => Ok(()),
    }
}

pub fn validate_tags(tags: &[String], limits: &ArticleLimits) -> Result<(), Violations> {
    let mut violations = Violations::new();
    if tags.len() > limits.tags_max {
        violations.push(format!("at most {} tags are allowed", limits.tags_max));
    }
    for tag in tags {
        if tag.chars().count() > limits.tag_max {
            violations.push(format!(
                "tag `{tag}` must be at most {} characters",
                limits.tag_max
            ));
        }
    }
    into_result(violations)
}

/// Run every field rule and return the combined violations.
pub fn validate_fields(fields: FieldsRef<'_>, limits: &ArticleLimits) -> Result<(), Violations> {
    let mut violations = Violations::new();
    for outcome in [
        validate_title(fields.title, limits),
        validate_content(fields.content, limits),
        validate_excerpt(fields.excerpt, limits),
        validate_tags(fields.tags, limits),
    ] {
        if let Err(found) = outcome {
            violations.extend(found);
        }
    }
    into_result(violations)
}

/// Trim, lowercase, drop blanks, and drop repeats while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn into_result(violations: Violations) -> Result<(), Violations> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
