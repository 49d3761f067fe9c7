// src/models/config_file.rs
use serde::Deserialize;

/// On-disk shape of `.retitle.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub article_pattern: Option<String>,
    pub image_pattern: Option<String>,
    pub substitutions: Vec<SubstitutionEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubstitutionEntry {
    pub from: String,
    pub to: String,
}
