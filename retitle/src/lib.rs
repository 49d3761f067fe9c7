pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::config::{Config, Substitutions, load_config};
pub use crate::core::locator::{list_matching, locate_article};
pub use crate::core::renamer::{
    extract_num, plan_article_rename, plan_image_renames, rename_all, rename_file,
};
pub use crate::core::title::{detect_title, normalize_title};
pub use crate::error::{Error, Result};
pub use crate::models::{Rename, RenamePlan};
