// src/application/ports/util.rs

/// Turns a title into a slug. Implementations must be total: every input
/// yields a string, and no input may panic.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
