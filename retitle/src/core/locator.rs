// src/core/locator.rs
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::utils::path_in;

/// Lists the names of the regular files directly inside `dir` that match
/// `pattern`, sorted by name. Subdirectories are not descended into.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or one of its entries cannot be read.
pub fn list_matching(dir: &Path, pattern: &Pattern) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
            Error::io(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping file with a non UTF-8 name");
            continue;
        };
        if pattern.matches(name) {
            names.push(name.to_owned());
        }
    }

    debug!(pattern = pattern.as_str(), matches = names.len(), "listed files");
    Ok(names)
}

/// Finds the one article file in `dir`. Inside the current directory the
/// bare file name is returned.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be read
/// * No file, or more than one file, matches `pattern`
pub fn locate_article(dir: &Path, pattern: &Pattern) -> Result<PathBuf> {
    let names = list_matching(dir, pattern)?;

    match names.as_slice() {
        [name] => Ok(path_in(dir, name)),
        _ => Err(Error::NoUniqueMatch {
            pattern: pattern.as_str().to_owned(),
            found: names.len(),
        }),
    }
}
