//! Preview command implementation

use anyhow::{Context, Result};
use quillpress_core::MarkdownRenderer;
use std::fs;

/// Render a Markdown chapter to an HTML fragment on stdout
pub fn preview(input: &str) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {input}"))?;

    let html = MarkdownRenderer::new().render(&markdown);
    print!("{html}");

    Ok(())
}
