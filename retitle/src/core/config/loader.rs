// src/core/config/loader.rs
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::{Config, DEFAULT_ARTICLE_PATTERN, DEFAULT_IMAGE_PATTERN, Substitutions};
use crate::error::{Error, Result};
use crate::models::ConfigFile;

pub const CONFIG_FILE_NAME: &str = ".retitle.toml";

/// Loads the run configuration for `dir`.
///
/// An explicit path wins. Otherwise `.retitle.toml` is searched for in `dir`
/// and then in each parent directory, stopping at the first one found. With
/// no file at all the built-in defaults are used.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
/// * A pattern in the file is not a valid glob
/// * A substitution has an empty `from`
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(dir)?,
    };

    let Some(path) = path else {
        debug!("no {CONFIG_FILE_NAME} found, using built-in defaults");
        return Config::with_defaults();
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path).map_err(|source| Error::io(&path, source))?;
    parse_config(&content, &path)
}

/// Walks from `dir` towards the filesystem root looking for `.retitle.toml`.
///
/// # Errors
///
/// Returns an error if `dir` is relative and the current directory cannot be
/// determined.
pub fn find_config_file(dir: &Path) -> Result<Option<PathBuf>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|source| Error::io(dir, source))?
            .join(dir)
    };

    let mut current_dir = absolute_dir;
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return Ok(Some(config_file));
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(None)
}

/// Builds a [`Config`] from the contents of a config file. `path` is only
/// used in error messages.
///
/// # Errors
///
/// See [`load_config`].
pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    let file: ConfigFile = toml::from_str(content).map_err(|err| Error::Config {
        path: path.to_path_buf(),
        message: err.message().to_owned(),
    })?;

    let mut substitutions = Substitutions::default();
    for entry in file.substitutions {
        if entry.from.is_empty() {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!("substitution to {:?} has an empty `from`", entry.to),
            });
        }
        substitutions.insert(entry.from, entry.to);
    }

    Config::new(
        file.article_pattern
            .as_deref()
            .unwrap_or(DEFAULT_ARTICLE_PATTERN),
        file.image_pattern.as_deref().unwrap_or(DEFAULT_IMAGE_PATTERN),
        substitutions,
    )
}
