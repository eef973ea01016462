// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Lowercase ASCII, non-alphanumeric runs collapsed to single hyphens, no
/// leading or trailing hyphen. Non-ASCII letters are transliterated.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
