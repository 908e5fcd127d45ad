//! Quillpress Core Library
//!
//! This crate provides the core types and assembly logic for the Quillpress
//! EPUB creation system. A front end supplies the book inputs (title, author,
//! optional cover image, ordered chapters, metadata); the core assembles an
//! in-memory package and serializes it to EPUB container bytes.

pub mod assemble;
pub mod error;
pub mod export;
pub mod render;
pub mod serialize;
pub mod types;

pub use assemble::PackageAssembler;
pub use error::{AssemblyError, QuillpressError, Result, SerializeError, ValidationError};
pub use export::{export, Export};
pub use render::MarkdownRenderer;
pub use serialize::{serialize, EPUB_MIME_TYPE};
pub use types::{ChapterStore, CoverDesignation, Metadata, NavKind, Package, PackageItem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_state() {
        let store = ChapterStore::new();
        assert_eq!(store.titles().collect::<Vec<_>>(), vec!["Chapter 1"]);
        assert_eq!(Metadata::default().publisher, "Self Published");
    }
}
