pub mod corpus;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docsplit::{Chunk, LengthUnit, SplitOutput, SplitterConfig, SplitterSettings};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Split text into overlapping, size-bounded chunks for embedding
#[derive(Parser, Debug)]
#[command(name = "docsplit", version)]
pub struct Cli {
    /// File or directory to split; stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// JSON settings file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum measured length of a chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Trailing content carried into the next chunk
    #[arg(long)]
    pub chunk_overlap: Option<usize>,

    /// Separator, coarsest first; repeat for more. Escapes \n \t \r \\ are decoded
    #[arg(long = "separator", value_name = "SEP", allow_hyphen_values = true)]
    pub separators: Vec<String>,

    /// Measure length in UTF-8 bytes instead of characters
    #[arg(long)]
    pub bytes: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Extensions picked up when INPUT is a directory
    #[arg(long = "ext", value_delimiter = ',', default_value = "txt,md")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable chunks with a header line each
    Text,
    /// One JSON document with every chunk and warning
    Json,
    /// One JSON object per chunk
    Jsonl,
}

impl Cli {
    /// Merge the settings file (if any) with command-line overrides
    pub fn splitter_config(&self) -> Result<SplitterConfig> {
        let mut settings = match &self.config {
            Some(path) => SplitterSettings::from_path(path)?,
            None => SplitterSettings::default(),
        };

        if let Some(size) = self.chunk_size {
            settings.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            settings.chunk_overlap = overlap;
        }
        if !self.separators.is_empty() {
            settings.separators = self.separators.iter().map(|s| decode_escapes(s)).collect();
        }
        if self.bytes {
            settings.length = LengthUnit::Bytes;
        }

        settings
            .into_config()
            .context("Invalid splitter configuration")
    }
}

/// Decode the escape sequences a shell makes awkward to type
pub fn decode_escapes(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('\\') => decoded.push('\\'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}

#[derive(Serialize)]
struct DocumentChunks<'a> {
    path: &'a str,
    #[serde(flatten)]
    output: &'a SplitOutput,
}

#[derive(Serialize)]
struct ChunkRecord<'a> {
    path: &'a str,
    #[serde(flatten)]
    chunk: &'a Chunk,
}

/// Write split results for every document in the requested format
pub fn write_output(
    out: &mut impl Write,
    format: OutputFormat,
    results: &[(String, SplitOutput)],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (path, output) in results {
                for chunk in &output.chunks {
                    let meta = &chunk.metadata;
                    writeln!(
                        out,
                        "--- {} #{} [{}..{}] len={}{}",
                        path,
                        meta.index,
                        meta.start_offset,
                        meta.end_offset,
                        meta.length,
                        if meta.oversized { " (oversized)" } else { "" }
                    )?;
                    writeln!(out, "{}", chunk.text)?;
                }
            }
        }
        OutputFormat::Json => {
            let documents: Vec<DocumentChunks<'_>> = results
                .iter()
                .map(|(path, output)| DocumentChunks { path, output })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &documents)
                .context("Failed to serialize chunks")?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for (path, output) in results {
                for chunk in &output.chunks {
                    serde_json::to_writer(&mut *out, &ChunkRecord { path, chunk })
                        .context("Failed to serialize chunk")?;
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsplit::RecursiveSplitter;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("docsplit").chain(args.iter().copied()))
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_escapes("\\n\\n"), "\n\n");
        assert_eq!(decode_escapes("a\\tb"), "a\tb");
        assert_eq!(decode_escapes("\\\\"), "\\");
        assert_eq!(decode_escapes("\\x"), "\\x");
        assert_eq!(decode_escapes("end\\"), "end\\");
        assert_eq!(decode_escapes(""), "");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = cli(&[
            "--chunk-size",
            "10",
            "--chunk-overlap",
            "2",
            "--separator",
            "\\n",
            "--separator",
            " ",
            "--separator",
            "",
        ]);
        let config = cli.splitter_config().unwrap();
        assert_eq!(config.chunk_size(), 10);
        assert_eq!(config.chunk_overlap(), 2);
        assert_eq!(config.separators(), &["\n", " ", ""]);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = cli(&["--chunk-size", "5", "--chunk-overlap", "5"]);
        let message = format!("{:#}", cli.splitter_config().unwrap_err());
        assert!(message.contains("Invalid splitter configuration"));
        assert!(message.contains("must be smaller than chunk size"));
    }

    #[test]
    fn test_bytes_flag() {
        let cli = cli(&["--chunk-size", "100", "--chunk-overlap", "10", "--bytes"]);
        let config = cli.splitter_config().unwrap();
        assert_eq!(config.length("é"), 2);
    }

    #[test]
    fn test_chunk_size_below_default_overlap_rejected() {
        // The default overlap is kept, never clamped to fit a smaller size
        let size_only = cli(&["--chunk-size", "100"]);
        let message = format!("{:#}", size_only.splitter_config().unwrap_err());
        assert!(message.contains("Invalid splitter configuration"));
        assert!(message.contains("Chunk overlap (200) must be smaller than chunk size (100)"));

        let with_overlap = cli(&["--chunk-size", "100", "--chunk-overlap", "99"]);
        assert_eq!(with_overlap.splitter_config().unwrap().chunk_overlap(), 99);
    }

    #[test]
    fn test_extensions_default_and_override() {
        assert_eq!(cli(&[]).extensions, vec!["txt", "md"]);
        assert_eq!(cli(&["--ext", "rst,org"]).extensions, vec!["rst", "org"]);
    }

    #[test]
    fn test_jsonl_output() {
        let splitter = RecursiveSplitter::new(SplitterConfig::new(5, 0).unwrap());
        let results = vec![("doc.txt".to_string(), splitter.split("abcde fghij"))];

        let mut buffer = Vec::new();
        write_output(&mut buffer, OutputFormat::Jsonl, &results).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["path"], "doc.txt");
        assert_eq!(lines[0]["text"], "abcde");
        assert_eq!(lines[2]["metadata"]["start_offset"], 6);
    }

    #[test]
    fn test_text_output_marks_oversized() {
        let config = SplitterConfig::builder()
            .chunk_size(3)
            .chunk_overlap(0)
            .separators([" "])
            .build()
            .unwrap();
        let results = vec![(
            "<stdin>".to_string(),
            RecursiveSplitter::new(config).split("abcdef"),
        )];

        let mut buffer = Vec::new();
        write_output(&mut buffer, OutputFormat::Text, &results).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "--- <stdin> #0 [0..6] len=6 (oversized)\nabcdef\n");
    }
}
