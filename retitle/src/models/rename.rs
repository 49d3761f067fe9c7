// src/models/rename.rs
use std::fmt;

/// A single rename of one file name to another inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

impl Rename {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The file already carries its target name.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Image renames in execution order, numbered from `first_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub first_number: u32,
    pub renames: Vec<Rename>,
}

impl RenamePlan {
    #[must_use]
    pub const fn new(first_number: u32) -> Self {
        Self {
            first_number,
            renames: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    /// The number the next image would get after this plan runs.
    #[must_use]
    pub fn next_number(&self) -> u32 {
        let planned = u32::try_from(self.renames.len()).unwrap_or(u32::MAX);
        self.first_number.saturating_add(planned)
    }
}
