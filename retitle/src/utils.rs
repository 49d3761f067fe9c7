// src/utils.rs
use crate::models::Rename;
use std::path::{Path, PathBuf};

/// `dir/name`, or the bare `name` when `dir` is the current directory.
#[must_use]
pub fn path_in(dir: &Path, name: &str) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// `<title>.<ext>`, taking the extension from `original`.
#[must_use]
pub fn titled_name(title: &str, original: &str) -> String {
    with_extension_of(title.to_owned(), original)
}

/// `<title>_<n>.<ext>`, taking the extension from `original`.
#[must_use]
pub fn numbered_name(title: &str, number: u32, original: &str) -> String {
    with_extension_of(format!("{title}_{number}"), original)
}

fn with_extension_of(mut base: String, original: &str) -> String {
    if let Some(extension) = Path::new(original).extension().and_then(|e| e.to_str()) {
        base.push('.');
        base.push_str(extension);
    }
    base
}

pub fn print_renames<'a>(renames: impl IntoIterator<Item = &'a Rename>) {
    for rename in renames {
        println!("{rename}");
    }
}
