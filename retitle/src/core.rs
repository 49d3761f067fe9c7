// src/core.rs
pub mod config;
pub mod locator;
pub mod renamer;
pub mod title;
