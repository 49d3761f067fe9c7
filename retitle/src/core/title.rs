// src/core/title.rs
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::core::config::Substitutions;
use crate::error::{Error, Result};

/// Separates metadata lines; never a title.
pub const SHORT_DIVIDER: &str = "---";
/// A line starting with this ends the title region.
pub const LONG_DIVIDER: &str = "-----";

/// Reads the article at `path` and returns its normalized title.
///
/// The title is the last non-empty line before the first long divider,
/// ignoring short divider lines.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or a line cannot be read
/// * The file contains no long divider line
pub fn detect_title(path: &Path, substitutions: &Substitutions) -> Result<String> {
    let file = File::open(path).map_err(|source| Error::io(path, source))?;

    let heading = find_heading(BufReader::new(file))
        .map_err(|source| Error::io(path, source))?
        .ok_or_else(|| Error::NoTitle {
            path: path.to_path_buf(),
        })?;

    let title = normalize_title(&heading, substitutions);
    debug!(%heading, %title, "detected title");
    Ok(title)
}

/// Returns the raw heading, or `None` when the input has no long divider.
/// A divider with nothing above it yields an empty heading.
///
/// Lines are compared as bytes; a heading that is not valid UTF-8 is decoded
/// lossily so its stray bytes fold to `_` like any other symbol.
///
/// # Errors
///
/// Propagates read errors.
pub fn find_heading(mut reader: impl BufRead) -> io::Result<Option<String>> {
    let mut candidate = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = trim_line_end(&buf);
        if line == SHORT_DIVIDER.as_bytes() || line.is_empty() {
            continue;
        }
        if line.starts_with(LONG_DIVIDER.as_bytes()) {
            return Ok(Some(String::from_utf8_lossy(&candidate).into_owned()));
        }
        candidate.clear();
        candidate.extend_from_slice(line);
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Turns a raw heading into a file name token: substitutions first, then
/// every character that is not an ASCII letter or digit becomes `_`, then
/// leading and trailing underscores are trimmed.
#[must_use]
pub fn normalize_title(title: &str, substitutions: &Substitutions) -> String {
    static NON_ALPHANUMERIC: OnceLock<Regex> = OnceLock::new();
    static EDGE_UNDERSCORES: OnceLock<Regex> = OnceLock::new();
    let non_alphanumeric =
        NON_ALPHANUMERIC.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());
    let edge_underscores = EDGE_UNDERSCORES.get_or_init(|| Regex::new(r"^_+|_+$").unwrap());

    let substituted = substitutions.apply(title);
    let folded = non_alphanumeric.replace_all(&substituted, "_");
    edge_underscores.replace_all(&folded, "").into_owned()
}
