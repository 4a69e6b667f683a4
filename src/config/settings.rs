use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{
    ByteCount, CharCount, ConfigError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
    DEFAULT_SEPARATORS, SplitterConfig,
};

/// Unit a settings file measures chunks in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Chars,
    Bytes,
}

/// Serializable splitter settings, e.g. loaded from a JSON file
///
/// Every field is optional; missing ones fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitterSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub separators: Vec<String>,
    pub length: LengthUnit,
}

impl Default for SplitterSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            length: LengthUnit::default(),
        }
    }
}

impl SplitterSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse splitter settings")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .context(format!("Failed to read settings file: {}", path.display()))?;
        Self::from_json(&json).context(format!("Invalid settings file: {}", path.display()))
    }

    /// Validate into a [`SplitterConfig`]
    pub fn into_config(self) -> Result<SplitterConfig, ConfigError> {
        let builder = SplitterConfig::builder()
            .chunk_size(self.chunk_size)
            .chunk_overlap(self.chunk_overlap)
            .separators(self.separators);

        let builder = match self.length {
            LengthUnit::Chars => builder.length_function(CharCount),
            LengthUnit::Bytes => builder.length_function(ByteCount),
        };

        builder.build()
    }
}
