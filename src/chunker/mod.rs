mod chunk;
mod merge;
mod splitter;


pub use chunk::{Chunk, ChunkMetadata, OversizedChunk, stitch};

use serde::Serialize;
use tracing::warn;

use crate::config::SplitterConfig;
use splitter::{Span, split_recursive};

/// Position of a chunk in its split output
pub type ChunkId = u32;

/// Chunks produced by one split call, with the oversized-chunk diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitOutput {
    pub chunks: Vec<Chunk>,
    pub warnings: Vec<OversizedChunk>,
}

impl SplitOutput {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(|c| c.text.as_str())
    }

    pub fn into_texts(self) -> Vec<String> {
        self.chunks.into_iter().map(|c| c.text).collect()
    }
}

/// Recursive, separator-aware text splitter
///
/// Splits on the coarsest separator present, recurses into pieces that are
/// still too large with the finer separators, and merges small pieces back
/// into chunks of up to `chunk_size` with `chunk_overlap` carried between
/// neighbours.
#[derive(Debug, Clone, Default)]
pub struct RecursiveSplitter {
    config: SplitterConfig,
}

impl RecursiveSplitter {
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split text into ordered, non-empty chunks
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split(text).into_texts()
    }

    /// Split text, keeping chunk metadata and oversized-chunk diagnostics
    ///
    /// Never fails: a piece no separator can subdivide is returned whole
    /// and reported in [`SplitOutput::warnings`].
    pub fn split(&self, text: &str) -> SplitOutput {
        if text.is_empty() {
            return SplitOutput::default();
        }

        let spans = if self.config.length(text) <= self.config.chunk_size() {
            vec![Span {
                start: 0,
                end: text.len(),
            }]
        } else {
            let mut spans = Vec::new();
            split_recursive(&self.config, text, 0, self.config.separators(), &mut spans);
            spans
        };

        self.build_output(text, spans)
    }

    fn build_output(&self, text: &str, spans: Vec<Span>) -> SplitOutput {
        let chunk_size = self.config.chunk_size();
        let mut output = SplitOutput::default();

        for (i, span) in spans.into_iter().enumerate() {
            let index = chunk_id(i);
            let chunk_text = &text[span.start..span.end];
            let length = self.config.length(chunk_text);
            let oversized = length > chunk_size;

            if oversized {
                warn!(
                    index,
                    start_offset = span.start,
                    "Created a chunk of size {}, which is longer than the specified {}",
                    length,
                    chunk_size
                );
                output.warnings.push(OversizedChunk {
                    index,
                    length,
                    chunk_size,
                });
            }

            output
                .chunks
                .push(Chunk::new(chunk_text, index, span.start, length, oversized));
        }

        output
    }
}

/// Chunk position as a [`ChunkId`], saturating at `ChunkId::MAX`
fn chunk_id(position: usize) -> ChunkId {
    ChunkId::try_from(position).unwrap_or(ChunkId::MAX)
}
