//! Book manifest format for the `build` command

use anyhow::{Context, Result};
use quillpress_core::{ChapterStore, Metadata};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A complete book description as authored on disk
#[derive(Debug, Deserialize)]
pub struct BookManifest {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Optional cover image path, relative to the manifest
    #[serde(default)]
    pub cover: Option<PathBuf>,

    /// Metadata record; omitted fields take their defaults
    #[serde(default)]
    pub metadata: Metadata,

    /// Chapters in reading order
    pub chapters: Vec<ChapterSource>,
}

/// One chapter: inline Markdown or a file reference
#[derive(Debug, Deserialize)]
pub struct ChapterSource {
    pub title: String,

    /// Inline Markdown body (wins over `file` when both are given)
    #[serde(default)]
    pub body: Option<String>,

    /// Markdown file path, relative to the manifest
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl BookManifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Build the chapter store, resolving file references relative to
    /// the manifest's directory
    pub fn chapter_store(&self, base_dir: &Path) -> Result<ChapterStore> {
        let mut store = ChapterStore::empty();
        for chapter in &self.chapters {
            let body = match (&chapter.body, &chapter.file) {
                (Some(body), _) => body.clone(),
                (None, Some(file)) => {
                    let path = base_dir.join(file);
                    fs::read_to_string(&path).with_context(|| {
                        format!("Failed to read chapter file: {}", path.display())
                    })?
                }
                (None, None) => String::new(),
            };
            store.insert(chapter.title.clone(), body);
        }
        Ok(store)
    }
}
