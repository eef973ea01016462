// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Derive a slug candidate from free text. May return an empty string when
    /// the input has no usable characters.
    fn slugify(&self, input: &str) -> String;
}
