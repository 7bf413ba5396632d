//! Reading and writing `.docx` packages (OPC zip containers).
//!
//! Only `word/document.xml` is ever parsed or rewritten; every other part is
//! carried through byte-for-byte so template styling, numbering, and media
//! survive untouched.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use tracing::debug;
use zip::write::SimpleFileOptions;

use crate::document::Document;
use crate::error::{DocxError, Result};
use crate::xml::write_document;

/// Part name of the main document inside the package.
const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const RELS_PART: &str = "_rels/.rels";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

#[derive(Debug, Clone)]
struct Part {
    name: String,
    data: Vec<u8>,
}

/// An in-memory `.docx` package: the parsed main document plus the raw bytes
/// of every other part, in their original order.
#[derive(Debug, Clone)]
pub struct DocxPackage {
    parts: Vec<Part>,
    document: Document,
}

impl DocxPackage {
    /// Read a package from raw `.docx` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            parts.push(Part { name, data });
        }

        let part = parts
            .iter()
            .find(|part| part.name == DOCUMENT_PART)
            .ok_or_else(|| DocxError::MissingPart(DOCUMENT_PART.to_string()))?;
        let xml = std::str::from_utf8(&part.data)
            .map_err(|_| DocxError::PartEncoding(DOCUMENT_PART.to_string()))?;
        let document = Document::from_xml(xml)?;
        debug!(parts = parts.len(), "loaded docx package");
        Ok(Self { parts, document })
    }

    /// Read a package from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(&fs::read(path)?)
    }

    /// Build a minimal single-document package around an existing document.
    /// Used by tests and callers that synthesize templates in memory.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        let parts = vec![
            Part {
                name: CONTENT_TYPES_PART.to_string(),
                data: CONTENT_TYPES_XML.as_bytes().to_vec(),
            },
            Part {
                name: RELS_PART.to_string(),
                data: RELS_XML.as_bytes().to_vec(),
            },
            Part {
                name: DOCUMENT_PART.to_string(),
                data: Vec::new(),
            },
        ];
        Self { parts, document }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Serialize the package back to `.docx` bytes. The main document part is
    /// re-rendered from its tree; all other parts round-trip verbatim.
    pub fn save_to_bytes(&self) -> Result<Vec<u8>> {
        let rendered = write_document(self.document.root())?;
        let mut buffer = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
            let options = SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated);
            for part in &self.parts {
                writer.start_file(part.name.as_str(), options)?;
                if part.name == DOCUMENT_PART {
                    writer.write_all(&rendered)?;
                } else {
                    writer.write_all(&part.data)?;
                }
            }
            writer.finish()?;
        }
        debug!(bytes = buffer.len(), "serialized docx package");
        Ok(buffer)
    }

    /// Serialize the package to a file on disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.save_to_bytes()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document::from_xml(
            "<w:document><w:body><w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p>\
             </w:tc></w:tr></w:tbl></w:body></w:document>",
        )
        .expect("parse sample")
    }

    #[test]
    fn packages_round_trip_through_zip() {
        let package = DocxPackage::from_document(sample_document());
        let bytes = package.save_to_bytes().expect("save");
        let reloaded = DocxPackage::from_bytes(&bytes).expect("reload");
        assert_eq!(reloaded.document(), package.document());
        assert_eq!(reloaded.parts.len(), package.parts.len());
    }

    #[test]
    fn untouched_parts_survive_byte_for_byte() {
        let package = DocxPackage::from_document(sample_document());
        let bytes = package.save_to_bytes().expect("save");
        let reloaded = DocxPackage::from_bytes(&bytes).expect("reload");
        let rels = reloaded
            .parts
            .iter()
            .find(|part| part.name == RELS_PART)
            .expect("rels part");
        assert_eq!(rels.data, RELS_XML.as_bytes());
    }

    #[test]
    fn mutations_persist_across_serialization() {
        let mut package = DocxPackage::from_document(sample_document());
        {
            let mut table = package.document_mut().table_mut(0).expect("table");
            let mut row = table.row_mut(0).expect("row");
            row.cell_mut(0).expect("cell").set_text("updated");
        }
        let bytes = package.save_to_bytes().expect("save");
        let reloaded = DocxPackage::from_bytes(&bytes).expect("reload");
        let text = reloaded
            .document()
            .table(0)
            .expect("table")
            .row(0)
            .expect("row")
            .cell(0)
            .expect("cell")
            .text();
        assert_eq!(text, "updated");
    }

    #[test]
    fn zip_without_document_part_is_rejected() {
        let mut buffer = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
            writer
                .start_file("word/other.xml", SimpleFileOptions::default())
                .expect("start file");
            writer.write_all(b"<x/>").expect("write");
            writer.finish().expect("finish");
        }
        assert!(matches!(
            DocxPackage::from_bytes(&buffer),
            Err(DocxError::MissingPart(_))
        ));
    }

    #[test]
    fn saves_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.docx");
        DocxPackage::from_document(sample_document())
            .save(&path)
            .expect("save");
        let reloaded = DocxPackage::open(&path).expect("open");
        assert_eq!(reloaded.document(), &sample_document());
    }
}
