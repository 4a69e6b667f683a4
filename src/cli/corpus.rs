use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A text document to split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the input root, or `<stdin>`
    pub path: String,
    pub text: String,
}

/// Check if a path lies inside a directory that should never be split
pub fn should_ignore(path: &Path) -> bool {
    const IGNORED_DIRS: [&str; 10] = [
        "target",
        "node_modules",
        ".git",
        ".svn",
        ".hg",
        "build",
        "dist",
        "__pycache__",
        "venv",
        ".venv",
    ];

    path.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
    })
}

/// Check a file extension against the accepted list (case-insensitive)
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Read the documents named by the CLI input
///
/// `None` or `-` reads stdin, a file is read whole, a directory is walked.
pub fn read_input(input: Option<&Path>, extensions: &[String]) -> Result<Vec<Document>> {
    match input {
        None => read_stdin(),
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) if path.is_dir() => collect_documents(path, extensions),
        Some(path) => {
            let text = fs::read_to_string(path)
                .context(format!("Failed to read file: {}", path.display()))?;
            Ok(vec![Document {
                path: path.display().to_string(),
                text,
            }])
        }
    }
}

fn read_stdin() -> Result<Vec<Document>> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(vec![Document {
        path: "<stdin>".to_string(),
        text,
    }])
}

/// Walk a directory and collect every readable text file with an accepted extension
pub fn collect_documents(root: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    info!(root = %root.display(), "scanning for documents");

    let mut documents = Vec::new();
    let mut total_bytes = 0usize;

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_ignore(Path::new(e.file_name())))
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, extensions) {
            continue;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        debug!(path = %relative_path, bytes = text.len(), "collected document");
        total_bytes += text.len();
        documents.push(Document {
            path: relative_path,
            text,
        });
    }

    info!(documents = documents.len(), bytes = total_bytes, "scan complete");
    Ok(documents)
}
