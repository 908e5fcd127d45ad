//! Build command implementation

use crate::manifest::BookManifest;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Build an EPUB from a book manifest
pub fn build(manifest_path: &str, output: Option<&str>) -> Result<()> {
    let manifest_path = Path::new(manifest_path);
    let manifest = BookManifest::load(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or(Path::new("."));

    let chapters = manifest.chapter_store(base_dir)?;
    tracing::info!(
        "Loaded '{}' with {} chapters",
        manifest.title,
        chapters.len()
    );

    let cover = manifest
        .cover
        .as_ref()
        .map(|path| {
            let path = base_dir.join(path);
            image::open(&path)
                .with_context(|| format!("Failed to decode cover image: {}", path.display()))
        })
        .transpose()?;

    let export = quillpress_core::export(
        &manifest.title,
        &manifest.author,
        cover.as_ref(),
        &chapters,
        &manifest.metadata,
    )?;

    let output_path = output.unwrap_or(&export.file_name);
    fs::write(output_path, &export.data)
        .with_context(|| format!("Failed to write output file: {output_path}"))?;

    println!("Generated '{}' -> {}", manifest.title, output_path);

    Ok(())
}
