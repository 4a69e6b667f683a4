// Public API exports
pub mod chunker;
pub mod config;

// Re-export main types for convenience
pub use chunker::{
    Chunk, ChunkId, ChunkMetadata, OversizedChunk, RecursiveSplitter, SplitOutput, stitch,
};

pub use config::{
    ByteCount, CharCount, ConfigError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
    DEFAULT_SEPARATORS, LengthFunction, LengthUnit, SplitterConfig, SplitterConfigBuilder,
    SplitterSettings,
};
