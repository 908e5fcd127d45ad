//! Package assembly: book inputs -> in-memory package

use crate::error::AssemblyError;
use crate::render::MarkdownRenderer;
use crate::types::{ChapterStore, CoverDesignation, Metadata, NavKind, Package, PackageItem};
use chrono::Utc;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use uuid::Uuid;

/// Fixed language tag for generated packages
const LANGUAGE: &str = "en";

/// Logical path of the embedded cover image
const COVER_IMAGE_PATH: &str = "images/cover.png";

/// Stylesheet shared by every content document
const STYLESHEET: &str = r#"body { font-family: "Crimson Text", Georgia, serif; line-height: 1.6; margin: 2em; }
h1, h2, h3 { color: #2c3e50; margin-top: 1.5em; }
p { text-align: justify; margin-bottom: 1em; }
img { max-width: 100%; display: block; margin: 1em auto; }
nav { margin: 2em 0; }
nav ol { list-style-type: none; padding-left: 0; }
nav ol li { margin-bottom: 0.5em; }
nav ol li a { color: #2c3e50; text-decoration: none; }
nav ol li a:hover { text-decoration: underline; }
"#;

/// Assembles complete packages from book inputs.
///
/// Assembly is atomic: any failure returns `Err` and no partial
/// package is ever exposed. Input validation (non-empty title and
/// author, at least one chapter with content) is the caller's
/// responsibility; see [`crate::export`].
pub struct PackageAssembler {
    renderer: MarkdownRenderer,
}

impl PackageAssembler {
    pub fn new() -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Use a custom renderer configuration
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Build a package from the book inputs.
    ///
    /// The reading order is [cover page if present] + [table of
    /// contents] + [chapters in store order]. Chapter file identity is
    /// positional (`chapter_{idx}.xhtml`), so renaming a chapter keeps
    /// its file name within one build, but identity is not stable
    /// across rebuilds when chapters are reordered.
    pub fn assemble(
        &self,
        title: &str,
        author: &str,
        cover: Option<&DynamicImage>,
        chapters: &ChapterStore,
        metadata: &Metadata,
    ) -> Result<Package, AssemblyError> {
        let identifier = Uuid::new_v4();
        let mut items = Vec::new();
        let mut spine = Vec::new();
        let mut designation = None;

        if let Some(image) = cover {
            let data = encode_cover(image)?;
            items.push(PackageItem::BinaryAsset {
                id: "cover_image".to_string(),
                path: COVER_IMAGE_PATH.to_string(),
                media_type: "image/png".to_string(),
                data: data.clone(),
            });
            items.push(PackageItem::TextDocument {
                id: "cover_page".to_string(),
                path: "cover.xhtml".to_string(),
                title: "Cover".to_string(),
                content: self.cover_page(),
            });
            // Second registration of the same bytes, for reader compatibility
            designation = Some(CoverDesignation {
                item_id: "cover_image".to_string(),
                data,
            });
            spine.push("cover_page".to_string());
        }

        items.push(PackageItem::TextDocument {
            id: "toc_page".to_string(),
            path: "toc.xhtml".to_string(),
            title: "Table of Contents".to_string(),
            content: self.toc_page(chapters),
        });
        spine.push("toc_page".to_string());

        for (idx, (chapter_title, body)) in chapters.iter().enumerate() {
            let id = format!("chapter_{}", idx + 1);
            let html = self.renderer.render(body);
            let escaped = escape_html(chapter_title);
            items.push(PackageItem::TextDocument {
                id: id.clone(),
                path: format!("{id}.xhtml"),
                title: chapter_title.to_string(),
                content: self.document(
                    chapter_title,
                    &format!("<h1 id=\"{escaped}\">{escaped}</h1>\n{html}"),
                ),
            });
            spine.push(id);
        }

        items.push(PackageItem::StyleSheet {
            id: "style".to_string(),
            path: "style/main.css".to_string(),
            css: STYLESHEET.to_string(),
        });
        items.push(PackageItem::NavDocument {
            id: "nav".to_string(),
            path: "nav.xhtml".to_string(),
            kind: NavKind::Nav,
            content: self.nav_document(chapters),
        });
        items.push(PackageItem::NavDocument {
            id: "ncx".to_string(),
            path: "toc.ncx".to_string(),
            kind: NavKind::Ncx,
            content: self.ncx_document(title, &identifier, chapters),
        });

        Ok(Package {
            identifier,
            title: title.to_string(),
            language: LANGUAGE.to_string(),
            author: author.to_string(),
            metadata: metadata.clone(),
            modified: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            items,
            spine,
            cover: designation,
        })
    }

    /// Wrap a body fragment in a full XHTML document
    fn document(&self, title: &str, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops">
<head>
    <title>{}</title>
    <meta charset="UTF-8"/>
    <link rel="stylesheet" type="text/css" href="style/main.css"/>
</head>
<body>
{}
</body>
</html>"#,
            escape_html(title),
            body
        )
    }

    /// Minimal page centering the cover image
    fn cover_page(&self) -> String {
        self.document(
            "Cover",
            &format!(
                "<div style=\"text-align: center; padding: 0; margin: 0;\">\n\
                 <img src=\"{COVER_IMAGE_PATH}\" alt=\"cover\"/></div>"
            ),
        )
    }

    /// Human-readable contents page: heading plus a navigable ordered
    /// list, one link per chapter, targeting the chapter's heading id
    fn toc_page(&self, chapters: &ChapterStore) -> String {
        let mut body = String::from("<h1>Table of Contents</h1>\n<nav>\n<ol>\n");
        for title in chapters.titles() {
            let escaped = escape_html(title);
            body.push_str(&format!("<li><a href=\"#{escaped}\">{escaped}</a></li>\n"));
        }
        body.push_str("</ol>\n</nav>");
        self.document("Table of Contents", &body)
    }

    /// EPUB 3 navigation document, chapter list in store order
    fn nav_document(&self, chapters: &ChapterStore) -> String {
        let mut entries = String::new();
        for (idx, title) in chapters.titles().enumerate() {
            entries.push_str(&format!(
                "<li><a href=\"chapter_{}.xhtml\">{}</a></li>\n",
                idx + 1,
                escape_html(title)
            ));
        }
        self.document(
            "Navigation",
            &format!("<nav epub:type=\"toc\" id=\"toc\">\n<h1>Table of Contents</h1>\n<ol>\n{entries}</ol>\n</nav>"),
        )
    }

    /// Legacy NCX for EPUB 2 readers
    fn ncx_document(&self, title: &str, identifier: &Uuid, chapters: &ChapterStore) -> String {
        let mut nav_points = String::new();
        for (idx, chapter_title) in chapters.titles().enumerate() {
            let order = idx + 1;
            nav_points.push_str(&format!(
                "    <navPoint id=\"navpoint-{order}\" playOrder=\"{order}\">\n"
            ));
            nav_points.push_str(&format!(
                "      <navLabel><text>{}</text></navLabel>\n",
                escape_html(chapter_title)
            ));
            nav_points.push_str(&format!(
                "      <content src=\"chapter_{order}.xhtml\"/>\n    </navPoint>\n"
            ));
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="urn:uuid:{identifier}"/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle><text>{}</text></docTitle>
  <navMap>
{}  </navMap>
</ncx>"#,
            escape_html(title),
            nav_points
        )
    }
}

impl Default for PackageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-encode the cover to a single-frame lossless raster (PNG)
fn encode_cover(image: &DynamicImage) -> Result<Vec<u8>, AssemblyError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Escape HTML special characters
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chapter_store() -> ChapterStore {
        let mut store = ChapterStore::empty();
        store.insert("Chapter 1", "# Hi");
        store.insert("Chapter 2", "body");
        store
    }

    fn sample_cover() -> DynamicImage {
        DynamicImage::new_rgb8(4, 4)
    }

    #[test]
    fn test_spine_without_cover() {
        let package = PackageAssembler::new()
            .assemble("My Book", "Jane Doe", None, &two_chapter_store(), &Metadata::default())
            .unwrap();
        assert_eq!(package.spine, vec!["toc_page", "chapter_1", "chapter_2"]);
        assert!(package.cover.is_none());
        assert!(package.item("cover_page").is_none());
    }

    #[test]
    fn test_spine_with_cover_starts_with_cover_page() {
        let cover = sample_cover();
        let package = PackageAssembler::new()
            .assemble(
                "My Book",
                "Jane Doe",
                Some(&cover),
                &two_chapter_store(),
                &Metadata::default(),
            )
            .unwrap();
        assert_eq!(
            package.spine,
            vec!["cover_page", "toc_page", "chapter_1", "chapter_2"]
        );
    }

    #[test]
    fn test_cover_designation_matches_embedded_bytes() {
        let cover = sample_cover();
        let package = PackageAssembler::new()
            .assemble(
                "My Book",
                "Jane Doe",
                Some(&cover),
                &two_chapter_store(),
                &Metadata::default(),
            )
            .unwrap();
        let designation = package.cover.as_ref().unwrap();
        assert_eq!(designation.item_id, "cover_image");
        let item = package.item("cover_image").unwrap();
        assert_eq!(designation.data, item.bytes());
        // PNG signature
        assert_eq!(&designation.data[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_chapter_documents_carry_heading_and_rendered_body() {
        let package = PackageAssembler::new()
            .assemble("My Book", "Jane Doe", None, &two_chapter_store(), &Metadata::default())
            .unwrap();
        let chapter = package.item("chapter_1").unwrap();
        let content = std::str::from_utf8(chapter.bytes()).unwrap();
        assert!(content.contains("<h1 id=\"Chapter 1\">Chapter 1</h1>"));
        assert!(content.contains("<h1>Hi</h1>"));
        assert!(content.contains("style/main.css"));
        assert_eq!(chapter.path(), "chapter_1.xhtml");
    }

    #[test]
    fn test_toc_page_links_use_in_document_anchors() {
        let package = PackageAssembler::new()
            .assemble("My Book", "Jane Doe", None, &two_chapter_store(), &Metadata::default())
            .unwrap();
        let toc = package.item("toc_page").unwrap();
        let content = std::str::from_utf8(toc.bytes()).unwrap();
        assert!(content.contains("<a href=\"#Chapter 1\">Chapter 1</a>"));
        assert!(content.contains("<a href=\"#Chapter 2\">Chapter 2</a>"));
    }

    #[test]
    fn test_nav_documents_list_chapters_in_store_order() {
        let package = PackageAssembler::new()
            .assemble("My Book", "Jane Doe", None, &two_chapter_store(), &Metadata::default())
            .unwrap();
        let nav = std::str::from_utf8(package.item("nav").unwrap().bytes()).unwrap();
        assert!(nav.contains("<a href=\"chapter_1.xhtml\">Chapter 1</a>"));
        let ncx = std::str::from_utf8(package.item("ncx").unwrap().bytes()).unwrap();
        assert!(ncx.contains("playOrder=\"1\""));
        assert!(ncx.contains("<content src=\"chapter_2.xhtml\"/>"));
        assert!(ncx.contains(&format!("urn:uuid:{}", package.identifier)));
    }

    #[test]
    fn test_fresh_identifier_per_build() {
        let assembler = PackageAssembler::new();
        let store = two_chapter_store();
        let meta = Metadata::default();
        let a = assembler.assemble("My Book", "Jane Doe", None, &store, &meta).unwrap();
        let b = assembler.assemble("My Book", "Jane Doe", None, &store, &meta).unwrap();
        assert_ne!(a.identifier, b.identifier);
        assert_eq!(a.spine, b.spine);
        assert_eq!(a.title, b.title);
        // Structurally identical apart from identifier and modified stamp
        let strip = |p: &Package| (p.items.clone(), p.spine.clone(), p.cover.clone());
        let (items_a, spine_a, cover_a) = strip(&a);
        let (items_b, spine_b, cover_b) = strip(&b);
        assert_eq!(spine_a, spine_b);
        assert_eq!(cover_a, cover_b);
        // The NCX embeds the identifier, everything else matches
        let differing: Vec<&str> = items_a
            .iter()
            .zip(items_b.iter())
            .filter(|(x, y)| x != y)
            .map(|(x, _)| x.id())
            .collect();
        assert_eq!(differing, vec!["ncx"]);
    }

    #[test]
    fn test_metadata_copied_verbatim() {
        let meta = Metadata {
            description: "A tale.".into(),
            publisher: "Test Press".into(),
            publication_date: "2024-01-02".into(),
            rights: "CC BY".into(),
        };
        let package = PackageAssembler::new()
            .assemble("My Book", "Jane Doe", None, &two_chapter_store(), &meta)
            .unwrap();
        assert_eq!(package.metadata, meta);
        assert_eq!(package.language, "en");
        assert_eq!(package.author, "Jane Doe");
    }

    #[test]
    fn test_titles_are_escaped_in_documents() {
        let mut store = ChapterStore::empty();
        store.insert("Tom & Jerry", "text");
        let package = PackageAssembler::new()
            .assemble("A & B", "X < Y", None, &store, &Metadata::default())
            .unwrap();
        let content =
            std::str::from_utf8(package.item("chapter_1").unwrap().bytes()).unwrap();
        assert!(content.contains("<h1 id=\"Tom &amp; Jerry\">Tom &amp; Jerry</h1>"));
    }
}
