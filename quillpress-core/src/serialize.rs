//! Container serialization: package -> EPUB byte stream

use crate::assemble::escape_html as escape_xml;
use crate::error::SerializeError;
use crate::types::{NavKind, Package, PackageItem};
use std::io::{Cursor, Write};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Root directory for content documents inside the container
const CONTENT_ROOT: &str = "OEBPS";

/// MIME type of the produced artifact
pub const EPUB_MIME_TYPE: &str = "application/epub+zip";

/// Serialize an assembled package into EPUB container bytes.
///
/// The output is deterministic for a given package (the identifier and
/// modified stamp live in the package, so bytes differ across builds
/// only because packages do). Any internal failure surfaces as a
/// single error; no partial file is ever exposed.
pub fn serialize(package: &Package) -> Result<Vec<u8>, SerializeError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // The mimetype entry must come first and uncompressed
    zip.start_file("mimetype", stored)?;
    zip.write_all(EPUB_MIME_TYPE.as_bytes())?;

    zip.start_file("META-INF/container.xml", deflated)?;
    zip.write_all(container_xml().as_bytes())?;

    zip.start_file(format!("{CONTENT_ROOT}/content.opf"), deflated)?;
    zip.write_all(package_document(package).as_bytes())?;

    for item in &package.items {
        zip.start_file(format!("{CONTENT_ROOT}/{}", item.path()), deflated)?;
        zip.write_all(item.bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// The fixed `META-INF/container.xml` pointing at the package document
fn container_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="{CONTENT_ROOT}/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#
    )
}

/// Build the OPF package document: Dublin Core metadata, manifest,
/// spine, and the cover designation when one is present
fn package_document(package: &Package) -> String {
    let mut metadata = String::new();
    metadata.push_str(&format!(
        "    <dc:identifier id=\"pub-id\">urn:uuid:{}</dc:identifier>\n",
        package.identifier
    ));
    metadata.push_str(&format!(
        "    <dc:title>{}</dc:title>\n",
        escape_xml(&package.title)
    ));
    metadata.push_str(&format!(
        "    <dc:language>{}</dc:language>\n",
        escape_xml(&package.language)
    ));
    metadata.push_str(&format!(
        "    <dc:creator>{}</dc:creator>\n",
        escape_xml(&package.author)
    ));
    metadata.push_str(&format!(
        "    <dc:description>{}</dc:description>\n",
        escape_xml(&package.metadata.description)
    ));
    metadata.push_str(&format!(
        "    <dc:publisher>{}</dc:publisher>\n",
        escape_xml(&package.metadata.publisher)
    ));
    metadata.push_str(&format!(
        "    <dc:date>{}</dc:date>\n",
        escape_xml(&package.metadata.publication_date)
    ));
    metadata.push_str(&format!(
        "    <dc:rights>{}</dc:rights>\n",
        escape_xml(&package.metadata.rights)
    ));
    metadata.push_str(&format!(
        "    <meta property=\"dcterms:modified\">{}</meta>\n",
        package.modified
    ));
    if let Some(cover) = &package.cover {
        metadata.push_str(&format!(
            "    <meta name=\"cover\" content=\"{}\"/>\n",
            escape_xml(&cover.item_id)
        ));
    }

    let mut manifest = String::new();
    for item in &package.items {
        manifest.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"{}\"{}/>\n",
            escape_xml(item.id()),
            escape_xml(item.path()),
            item.media_type(),
            manifest_properties(package, item)
        ));
    }

    let mut spine = String::new();
    for idref in &package.spine {
        spine.push_str(&format!(
            "    <itemref idref=\"{}\"/>\n",
            escape_xml(idref)
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="pub-id">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
{metadata}  </metadata>
  <manifest>
{manifest}  </manifest>
  <spine toc="ncx">
{spine}  </spine>
</package>"#
    )
}

/// Extra manifest properties: the EPUB 3 nav document and the
/// designated cover image carry reserved property values
fn manifest_properties(package: &Package, item: &PackageItem) -> &'static str {
    match item {
        PackageItem::NavDocument {
            kind: NavKind::Nav, ..
        } => " properties=\"nav\"",
        PackageItem::BinaryAsset { id, .. }
            if package.cover.as_ref().is_some_and(|c| &c.item_id == id) =>
        {
            " properties=\"cover-image\""
        }
        _ => "",
    }
}
