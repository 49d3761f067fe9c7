// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::iter;
use std::path::PathBuf;

use crate::core::config::load_config;
use crate::core::locator::locate_article;
use crate::core::renamer::{plan_article_rename, plan_image_renames, rename_all};
use crate::core::title::detect_title;
use crate::utils::print_renames;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the article and its images (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Config file to use instead of searching for .retitle.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the renames without performing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Renames the article in `args.directory` and its images after the
/// article's title.
///
/// # Errors
///
/// Returns the first failure of any stage: config loading, locating the
/// article, detecting its title, or renaming.
pub fn run(args: Args) -> Result<()> {
    let config = load_config(&args.directory, args.config.as_deref()).with_context(|| {
        format!("Failed to load configuration for {}", args.directory.display())
    })?;

    let article = locate_article(&args.directory, &config.article_pattern)?;
    let title = detect_title(&article, &config.substitutions)?;

    if args.dry_run {
        let plan = plan_image_renames(&args.directory, &title, &config.image_pattern)?;
        let article_rename = plan_article_rename(&args.directory, &title, &config.article_pattern)?;
        print_renames(plan.renames.iter().chain(iter::once(&article_rename)));
        return Ok(());
    }

    rename_all(&args.directory, &title, &config)?;
    Ok(())
}
