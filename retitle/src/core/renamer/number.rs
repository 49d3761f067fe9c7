// src/core/renamer/number.rs
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Extracts the sequence number from a name ending in `_<digits>.<ext>`.
///
/// Only the digits right before the final `.` count, so `a_1_b_7.jpg` is 7.
///
/// # Errors
///
/// Returns [`Error::NumberExtraction`] if the name does not end in
/// `_<digits>.<ext>` or the digits overflow a `u32`.
pub fn extract_num(name: &str) -> Result<u32> {
    static SEQUENCE: OnceLock<Regex> = OnceLock::new();
    let sequence = SEQUENCE.get_or_init(|| Regex::new(r"_([0-9]+)\.[^.]*$").unwrap());

    let failed = || Error::NumberExtraction {
        name: name.to_owned(),
    };

    let digits = sequence
        .captures(name)
        .and_then(|captures| captures.get(1))
        .ok_or_else(failed)?;

    digits.as_str().parse().map_err(|_| failed())
}
