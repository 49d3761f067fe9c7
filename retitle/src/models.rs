// src/models.rs
mod config_file;
mod rename;

pub use config_file::{ConfigFile, SubstitutionEntry};
pub use rename::{Rename, RenamePlan};
