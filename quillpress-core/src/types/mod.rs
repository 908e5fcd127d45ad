//! Core types for the Quillpress book model

mod chapters;
mod item;
mod metadata;
mod package;

pub use chapters::ChapterStore;
pub use item::{NavKind, PackageItem};
pub use metadata::Metadata;
pub use package::{CoverDesignation, Package};
