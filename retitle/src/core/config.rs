// src/core/config.rs
pub mod loader;
pub mod substitutions;

use glob::Pattern;

use crate::error::{Error, Result};

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config, parse_config};
pub use substitutions::Substitutions;

pub const DEFAULT_ARTICLE_PATTERN: &str = "*.txt";
pub const DEFAULT_IMAGE_PATTERN: &str = "*.jpg";

/// Everything a run needs besides the target directory. Built once and
/// passed by reference to each stage.
#[derive(Debug, Clone)]
pub struct Config {
    /// Matches the single article file.
    pub article_pattern: Pattern,
    /// Matches the images that belong to the article.
    pub image_pattern: Pattern,
    pub substitutions: Substitutions,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if either pattern is not a valid glob.
    pub fn new(
        article_pattern: &str,
        image_pattern: &str,
        substitutions: Substitutions,
    ) -> Result<Self> {
        Ok(Self {
            article_pattern: compile_pattern(article_pattern)?,
            image_pattern: compile_pattern(image_pattern)?,
            substitutions,
        })
    }

    /// `*.txt` articles, `*.jpg` images and the built-in substitution table.
    ///
    /// # Errors
    ///
    /// Never in practice; the default patterns are valid globs.
    pub fn with_defaults() -> Result<Self> {
        Self::new(
            DEFAULT_ARTICLE_PATTERN,
            DEFAULT_IMAGE_PATTERN,
            Substitutions::default(),
        )
    }
}

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_owned(),
        source,
    })
}
