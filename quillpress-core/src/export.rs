//! Top-level export action: validate, assemble, serialize

use crate::assemble::PackageAssembler;
use crate::error::{Result, ValidationError};
use crate::serialize::{serialize, EPUB_MIME_TYPE};
use crate::types::{ChapterStore, Metadata};
use image::DynamicImage;

/// A finished export, ready to be offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Download file name derived from the title
    pub file_name: String,

    /// MIME type of the artifact
    pub mime_type: &'static str,

    /// The EPUB container bytes
    pub data: Vec<u8>,
}

/// Run one export: validate the inputs, assemble the package, and
/// serialize it.
///
/// Every failure is returned as a single [`crate::QuillpressError`]
/// whose `Display` output is the user-facing message. Validation
/// failures are detected before assembly begins; assembly and
/// serialization failures abort the whole operation, so no partial
/// artifact is ever surfaced.
pub fn export(
    title: &str,
    author: &str,
    cover: Option<&DynamicImage>,
    chapters: &ChapterStore,
    metadata: &Metadata,
) -> Result<Export> {
    validate(title, author, chapters)?;

    let package = PackageAssembler::new().assemble(title, author, cover, chapters, metadata)?;
    let data = serialize(&package)?;

    Ok(Export {
        file_name: download_file_name(title),
        mime_type: EPUB_MIME_TYPE,
        data,
    })
}

/// Guard enforcing the caller-facing contract before assembly starts
fn validate(title: &str, author: &str, chapters: &ChapterStore) -> Result<()> {
    if title.is_empty() {
        return Err(ValidationError::MissingTitle.into());
    }
    if author.is_empty() {
        return Err(ValidationError::MissingAuthor.into());
    }
    if !chapters.has_content() {
        return Err(ValidationError::NoContent.into());
    }
    Ok(())
}

/// Normalized download name: lowercased title, spaces to underscores
fn download_file_name(title: &str) -> String {
    format!("{}.epub", title.to_lowercase().replace(' ', "_"))
}
