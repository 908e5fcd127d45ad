//! Items registered into an assembled package

/// Navigation flavor for [`PackageItem::NavDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    /// EPUB 3 navigation document (`nav.xhtml`)
    Nav,
    /// Legacy NCX for EPUB 2 readers (`toc.ncx`)
    Ncx,
}

/// A single item embedded in the package: a tagged, closed set in place
/// of open-ended item registration. Each carries an id (manifest
/// identity), a logical path relative to the content root, and its
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageItem {
    /// Opaque binary payload (the cover image)
    BinaryAsset {
        id: String,
        path: String,
        media_type: String,
        data: Vec<u8>,
    },

    /// XHTML content document (cover page, TOC page, chapters)
    TextDocument {
        id: String,
        path: String,
        title: String,
        content: String,
    },

    /// CSS stylesheet
    StyleSheet {
        id: String,
        path: String,
        css: String,
    },

    /// Format-mandated navigation structure
    NavDocument {
        id: String,
        path: String,
        kind: NavKind,
        content: String,
    },
}

impl PackageItem {
    pub fn id(&self) -> &str {
        match self {
            PackageItem::BinaryAsset { id, .. }
            | PackageItem::TextDocument { id, .. }
            | PackageItem::StyleSheet { id, .. }
            | PackageItem::NavDocument { id, .. } => id,
        }
    }

    /// Logical path relative to the content root
    pub fn path(&self) -> &str {
        match self {
            PackageItem::BinaryAsset { path, .. }
            | PackageItem::TextDocument { path, .. }
            | PackageItem::StyleSheet { path, .. }
            | PackageItem::NavDocument { path, .. } => path,
        }
    }

    pub fn media_type(&self) -> &str {
        match self {
            PackageItem::BinaryAsset { media_type, .. } => media_type,
            PackageItem::TextDocument { .. } => "application/xhtml+xml",
            PackageItem::StyleSheet { .. } => "text/css",
            PackageItem::NavDocument { kind, .. } => match kind {
                NavKind::Nav => "application/xhtml+xml",
                NavKind::Ncx => "application/x-dtbncx+xml",
            },
        }
    }

    /// Payload bytes as written into the container
    pub fn bytes(&self) -> &[u8] {
        match self {
            PackageItem::BinaryAsset { data, .. } => data,
            PackageItem::TextDocument { content, .. } => content.as_bytes(),
            PackageItem::StyleSheet { css, .. } => css.as_bytes(),
            PackageItem::NavDocument { content, .. } => content.as_bytes(),
        }
    }
}
