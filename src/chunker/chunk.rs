use serde::Serialize;
use sha2::{Digest, Sha256};

use super::ChunkId;

/// A chunk of text ready for embedding/indexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// The text content of this chunk
    pub text: String,
    /// Metadata about the chunk
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkMetadata {
    /// Position of the chunk in the output sequence
    pub index: ChunkId,
    /// Byte offset in the input text (start)
    pub start_offset: usize,
    /// Byte offset in the input text (end, exclusive)
    pub end_offset: usize,
    /// Measured length according to the configured length function
    pub length: usize,
    /// Whether the chunk exceeds the configured chunk size
    pub oversized: bool,
    /// SHA256 of the chunk text, hex encoded
    pub content_hash: String,
}

/// A chunk that could not be brought under the chunk size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OversizedChunk {
    pub index: ChunkId,
    pub length: usize,
    pub chunk_size: usize,
}

impl Chunk {
    pub(crate) fn new(
        text: &str,
        index: ChunkId,
        start_offset: usize,
        length: usize,
        oversized: bool,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        Self {
            text: text.to_string(),
            metadata: ChunkMetadata {
                index,
                start_offset,
                end_offset: start_offset + text.len(),
                length,
                oversized,
                content_hash: hex::encode(hasher.finalize()),
            },
        }
    }

    /// Bytes at the start of this chunk repeated from the end of `previous`
    pub fn overlap_with(&self, previous: &Chunk) -> &str {
        let shared = previous
            .metadata
            .end_offset
            .saturating_sub(self.metadata.start_offset)
            .min(self.text.len());
        &self.text[..shared]
    }
}

/// Reassemble the original text from chunks produced by one split call
///
/// Each chunk's overlap with what came before is dropped, so the result
/// matches the input character for character.
pub fn stitch(chunks: &[Chunk]) -> String {
    let mut text = String::new();
    let mut covered = 0;

    for chunk in chunks {
        let meta = &chunk.metadata;
        if meta.end_offset <= covered {
            continue;
        }

        let skip = covered.saturating_sub(meta.start_offset);
        text.push_str(&chunk.text[skip..]);
        covered = meta.end_offset;
    }

    text
}
