//! The assembled package: output of assembly, input to serialization

use super::{Metadata, PackageItem};
use uuid::Uuid;

/// The container-format cover designation: marks one embedded image as
/// the book's front cover, distinct from merely embedding it. Carries
/// its own copy of the re-encoded bytes alongside the embedded asset —
/// two registrations of the same bytes, kept for reader compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverDesignation {
    /// Manifest id of the designated cover image item
    pub item_id: String,
    /// The re-encoded cover bytes
    pub data: Vec<u8>,
}

/// A fully assembled, self-contained book package.
///
/// Built fresh on every export, never mutated after construction, and
/// discarded after serialization. The identifier is freshly generated
/// per build, so two builds of identical input differ in identifier
/// (and modified stamp) but nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Unique identifier for this build
    pub identifier: Uuid,

    /// Book title
    pub title: String,

    /// Language tag (fixed)
    pub language: String,

    /// Single author
    pub author: String,

    /// Caller-supplied metadata, copied verbatim
    pub metadata: Metadata,

    /// `dcterms:modified` stamp, captured at assembly so serialization
    /// is a pure function of the package
    pub modified: String,

    /// Every embedded item (cover asset, documents, stylesheet, nav)
    pub items: Vec<PackageItem>,

    /// Reading order: manifest ids of the spine documents
    pub spine: Vec<String>,

    /// Cover designation, present when a cover image was supplied
    pub cover: Option<CoverDesignation>,
}

impl Package {
    /// Look up an item by manifest id
    pub fn item(&self, id: &str) -> Option<&PackageItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Spine items in reading order
    pub fn spine_items(&self) -> impl Iterator<Item = &PackageItem> {
        self.spine.iter().filter_map(|id| self.item(id))
    }
}
