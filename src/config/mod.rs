mod error;
mod length;
mod settings;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use length::{ByteCount, CharCount, LengthFunction};
pub use settings::{LengthUnit, SplitterSettings};

use std::fmt;
use std::sync::Arc;

/// Default upper bound on a chunk's measured length
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Default amount of trailing content repeated at the start of the next chunk
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Paragraph, line, word, character
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Validated, immutable splitter configuration
#[derive(Clone)]
pub struct SplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    length_function: Arc<dyn LengthFunction>,
}

impl SplitterConfig {
    /// Default separators and length function with the given size and overlap
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, ConfigError> {
        Self::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .build()
    }

    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::new()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Separators in priority order, coarsest first
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Measure a text segment with the configured length function
    pub fn length(&self, text: &str) -> usize {
        self.length_function.length(text)
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            length_function: Arc::new(CharCount),
        }
    }
}

impl fmt::Debug for SplitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterConfig")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("separators", &self.separators)
            .finish_non_exhaustive()
    }
}

/// Mutable builder for a [`SplitterConfig`]; validation happens in `build`
pub struct SplitterConfigBuilder {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    length_function: Arc<dyn LengthFunction>,
}

impl SplitterConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        let defaults = SplitterConfig::default();
        Self {
            chunk_size: defaults.chunk_size,
            chunk_overlap: defaults.chunk_overlap,
            separators: defaults.separators,
            length_function: defaults.length_function,
        }
    }

    /// Set the maximum measured length of a chunk
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set how much trailing content is carried into the next chunk
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Replace the separator priority list (coarsest first)
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the length function used to measure chunks
    pub fn length_function(mut self, length_function: impl LengthFunction + 'static) -> Self {
        self.length_function = Arc::new(length_function);
        self
    }

    /// Validate and build the immutable configuration
    pub fn build(self) -> Result<SplitterConfig, ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.chunk_overlap,
                size: self.chunk_size,
            });
        }

        if self.separators.is_empty() {
            return Err(ConfigError::NoSeparators);
        }

        Ok(SplitterConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            separators: self.separators,
            length_function: self.length_function,
        })
    }
}

impl Default for SplitterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
