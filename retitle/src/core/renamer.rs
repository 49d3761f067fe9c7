// src/core/renamer.rs
pub mod number;

use glob::Pattern;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::locator::list_matching;
use crate::error::{Error, Result};
use crate::models::{Rename, RenamePlan};
use crate::utils::{numbered_name, path_in, titled_name};

pub use number::extract_num;

/// Works out how the images in `dir` will be renamed, without touching them.
///
/// Images already starting with `title` keep their names and only raise the
/// starting number past their own. The others are sorted by name and numbered
/// from `max(1, highest + 1)`.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be read
/// * An image starting with `title` has no `_<digits>` suffix
/// * The numbers would run past `u32::MAX`
pub fn plan_image_renames(dir: &Path, title: &str, pattern: &Pattern) -> Result<RenamePlan> {
    let images = list_matching(dir, pattern)?;
    if images.is_empty() {
        debug!(pattern = pattern.as_str(), "no images to rename");
    }

    let (named, mut rest): (Vec<String>, Vec<String>) =
        images.into_iter().partition(|name| name.starts_with(title));

    let mut highest: u32 = 0;
    for name in &named {
        highest = highest.max(extract_num(name)?);
    }
    let first_number = highest.saturating_add(1);
    debug!(already_named = named.len(), first_number, "numbering images");

    rest.sort();
    let mut plan = RenamePlan::new(first_number);
    let mut next = highest.checked_add(1);
    for from in rest {
        let number = next.ok_or_else(|| Error::NumbersExhausted {
            title: title.to_owned(),
        })?;
        let to = numbered_name(title, number, &from);
        plan.renames.push(Rename { from, to });
        next = number.checked_add(1);
    }

    Ok(plan)
}

/// The rename of the first file in `dir` matching the article pattern.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be read
/// * No file matches `pattern`
pub fn plan_article_rename(dir: &Path, title: &str, pattern: &Pattern) -> Result<Rename> {
    let articles = list_matching(dir, pattern)?;
    let article = articles.into_iter().next().ok_or_else(|| Error::NoUniqueMatch {
        pattern: pattern.as_str().to_owned(),
        found: 0,
    })?;

    let to = titled_name(title, &article);
    Ok(Rename { from: article, to })
}

/// Renames one file inside `dir`. A rename onto the same name does nothing.
///
/// # Errors
///
/// Returns [`Error::Io`] if the destination already exists or the rename
/// itself fails.
pub fn rename_file(dir: &Path, rename: &Rename) -> Result<()> {
    if rename.is_noop() {
        debug!(name = %rename.from, "already named");
        return Ok(());
    }

    let from = path_in(dir, &rename.from);
    let to = path_in(dir, &rename.to);

    if fs::symlink_metadata(&to).is_ok() {
        return Err(Error::io(
            to,
            io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        ));
    }

    fs::rename(&from, &to).map_err(|source| Error::io(from, source))?;
    info!(from = %rename.from, to = %rename.to, "renamed");
    Ok(())
}

/// Renames the images, then the article, after `title`.
///
/// Stops at the first failure. Renames already done are kept.
///
/// # Errors
///
/// See [`plan_image_renames`], [`plan_article_rename`] and [`rename_file`].
pub fn rename_all(dir: &Path, title: &str, config: &Config) -> Result<()> {
    let plan = plan_image_renames(dir, title, &config.image_pattern)?;
    for rename in &plan.renames {
        rename_file(dir, rename)?;
    }

    let article = plan_article_rename(dir, title, &config.article_pattern)?;
    rename_file(dir, &article)
}
