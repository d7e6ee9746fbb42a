//! OPC packaging: turns a validated document tree into a .docx artifact.
//!
//! The package is a ZIP container of XML parts. Parts are emitted in a
//! fixed order with fixed entry metadata, so the serialized structure is
//! deterministic for a given tree; the only volatile bytes are the
//! timestamps inside `docProps/core.xml`.
use crate::document::Document;
use crate::error::Result;
use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Content type URIs for the parts this crate emits.
mod content_type {
    pub const OPC_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const OPC_CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WML_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const WML_NUMBERING: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    pub const WML_HEADER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
    pub const WML_FOOTER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
    pub const XML: &str = "application/xml";
}

/// Relationship type URIs.
mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const HEADER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    pub const FOOTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
}

/// Maps the header/footer parts to the relationship ids referenced from the
/// section properties of `word/document.xml`.
#[derive(Debug, Default)]
pub(crate) struct RelationshipMap {
    header_id: Option<String>,
    footer_id: Option<String>,
}

impl RelationshipMap {
    pub(crate) fn set_header_id(&mut self, rel_id: String) {
        self.header_id = Some(rel_id);
    }

    pub(crate) fn set_footer_id(&mut self, rel_id: String) {
        self.footer_id = Some(rel_id);
    }

    pub(crate) fn header_id(&self) -> Option<&str> {
        self.header_id.as_deref()
    }

    pub(crate) fn footer_id(&self) -> Option<&str> {
        self.footer_id.as_deref()
    }
}

/// Serializer from a document tree to the packaged binary artifact.
pub struct Package;

impl Package {
    /// Serialize a document to the bytes of a .docx package.
    ///
    /// Validates every style/numbering reference and table shape first; a
    /// document that fails validation produces no bytes at all.
    pub fn serialize(doc: &Document) -> Result<Vec<u8>> {
        doc.validate()?;

        // Relationship ids for the document part, assigned in emission
        // order: styles, numbering, header, footer.
        let mut rels = RelationshipMap::default();
        let mut doc_rels: Vec<(String, &str, &str)> = Vec::new();
        let mut next_id = 1u32;
        let mut push_rel = |rel_type: &'static str, target: &'static str| {
            let id = format!("rId{}", next_id);
            next_id += 1;
            doc_rels.push((id.clone(), rel_type, target));
            id
        };

        push_rel(relationship_type::STYLES, "styles.xml");
        let has_numbering = !doc.numbering().is_empty();
        if has_numbering {
            push_rel(relationship_type::NUMBERING, "numbering.xml");
        }
        let header_xml = doc.header_xml()?;
        if header_xml.is_some() {
            let id = push_rel(relationship_type::HEADER, "header1.xml");
            rels.set_header_id(id);
        }
        let footer_xml = doc.footer_xml()?;
        if footer_xml.is_some() {
            let id = push_rel(relationship_type::FOOTER, "footer1.xml");
            rels.set_footer_id(id);
        }

        let mut parts: Vec<(&str, String)> = Vec::with_capacity(9);
        parts.push((
            "[Content_Types].xml",
            Self::content_types_xml(has_numbering, header_xml.is_some(), footer_xml.is_some()),
        ));
        parts.push(("_rels/.rels", Self::package_rels_xml()));
        parts.push(("word/document.xml", doc.to_xml(&rels)?));
        parts.push((
            "word/_rels/document.xml.rels",
            Self::document_rels_xml(&doc_rels),
        ));
        parts.push(("word/styles.xml", doc.styles().to_xml()?));
        if has_numbering {
            parts.push(("word/numbering.xml", doc.numbering().to_xml()?));
        }
        if let Some(xml) = header_xml {
            parts.push(("word/header1.xml", xml));
        }
        if let Some(xml) = footer_xml {
            parts.push(("word/footer1.xml", xml));
        }
        parts.push(("docProps/core.xml", Self::core_properties_xml(doc)));

        Self::write_zip(&parts)
    }

    /// Serialize a document and persist it at `path`.
    ///
    /// The artifact is written to a sibling temporary file and renamed onto
    /// the destination, so a failed run never leaves a truncated or
    /// zero-byte document at `path`.
    pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::serialize(doc)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.docx".to_string());
        let tmp = path.with_file_name(format!("{}.{}.tmp", file_name, std::process::id()));

        std::fs::write(&tmp, &bytes)?;
        if let Err(err) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    fn content_types_xml(has_numbering: bool, has_header: bool, has_footer: bool) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
        let _ = write!(
            xml,
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            content_type::OPC_RELATIONSHIPS
        );
        let _ = write!(
            xml,
            r#"<Default Extension="xml" ContentType="{}"/>"#,
            content_type::XML
        );
        let mut over = |part: &str, ct: &str| {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, ct
            );
        };
        over("/word/document.xml", content_type::WML_DOCUMENT_MAIN);
        over("/word/styles.xml", content_type::WML_STYLES);
        if has_numbering {
            over("/word/numbering.xml", content_type::WML_NUMBERING);
        }
        if has_header {
            over("/word/header1.xml", content_type::WML_HEADER);
        }
        if has_footer {
            over("/word/footer1.xml", content_type::WML_FOOTER);
        }
        over("/docProps/core.xml", content_type::OPC_CORE_PROPERTIES);
        xml.push_str("</Types>");
        xml
    }

    fn package_rels_xml() -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        let _ = write!(
            xml,
            r#"<Relationship Id="rId1" Type="{}" Target="word/document.xml"/>"#,
            relationship_type::OFFICE_DOCUMENT
        );
        let _ = write!(
            xml,
            r#"<Relationship Id="rId2" Type="{}" Target="docProps/core.xml"/>"#,
            relationship_type::CORE_PROPERTIES
        );
        xml.push_str("</Relationships>");
        xml
    }

    fn document_rels_xml(rels: &[(String, &str, &str)]) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (id, rel_type, target) in rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                id, rel_type, target
            );
        }
        xml.push_str("</Relationships>");
        xml
    }

    fn core_properties_xml(doc: &Document) -> String {
        let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        );
        if let Some(title) = doc.title() {
            let _ = write!(xml, "<dc:title>{}</dc:title>", escape_xml(title));
        }
        let creator = doc.creator().unwrap_or("catedra");
        let _ = write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator));
        let _ = write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            now
        );
        let _ = write!(
            xml,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            now
        );
        xml.push_str("</cp:coreProperties>");
        xml
    }

    fn write_zip(parts: &[(&str, String)]) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        // Fixed entry metadata keeps the archive structure deterministic.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (name, content) in parts {
            writer.start_file(*name, options)?;
            writer.write_all(content.as_bytes())?;
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocxError;
    use crate::numbering::{NumberingDefinition, NumberingRegistry};
    use crate::paragraph::Paragraph;
    use crate::run::Run;
    use crate::style::{Style, StyleRegistry};
    use crate::table::{Cell, Row, Table};
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::Read;

    fn empty_doc() -> Document {
        Document::new(
            StyleRegistry::with_defaults("Arial", 24),
            NumberingRegistry::new(),
        )
    }

    /// Extract a named part from serialized package bytes.
    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    /// Collect the text of every `<w:t>` element in document order.
    fn extract_texts(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut texts = Vec::new();
        let mut in_text = false;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
                Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text = false,
                Ok(Event::Text(e)) if in_text => {
                    texts.push(e.unescape().unwrap().into_owned());
                },
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(err) => panic!("XML parse error: {err}"),
            }
        }
        texts
    }

    /// Collect cell texts in row-major order.
    fn extract_cell_texts(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut cells = Vec::new();
        let mut current: Option<String> = None;
        let mut in_text = false;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:tc" => {
                    current = Some(String::new());
                },
                Ok(Event::End(e)) if e.name().as_ref() == b"w:tc" => {
                    cells.push(current.take().unwrap_or_default());
                },
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
                Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text = false,
                Ok(Event::Text(e)) if in_text => {
                    if let Some(ref mut cell) = current {
                        cell.push_str(&e.unescape().unwrap());
                    }
                },
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(err) => panic!("XML parse error: {err}"),
            }
        }
        cells
    }

    #[test]
    fn test_serialize_rejects_unknown_style() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::styled("Ghost").run(Run::text("x")));
        let err = Package::serialize(&doc).unwrap_err();
        assert!(matches!(err, DocxError::UnknownStyle(_)));
    }

    #[test]
    fn test_serialize_rejects_malformed_table() {
        let mut doc = empty_doc();
        doc.add_table(Table::new(vec![1000, 1000]).row(Row::new().cell(Cell::text("x"))));
        let err = Package::serialize(&doc).unwrap_err();
        assert!(matches!(err, DocxError::InvalidStructure(_)));
    }

    #[test]
    fn test_round_trip_hello() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("Hello")));

        let bytes = Package::serialize(&doc).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert_eq!(extract_texts(&document), vec!["Hello"]);
    }

    #[test]
    fn test_deterministic_document_part() {
        fn build() -> Document {
            let mut styles = StyleRegistry::with_defaults("Arial", 24);
            styles.register(Style::new("Heading1", "Heading 1").size(36).bold());
            let mut numbering = NumberingRegistry::new();
            numbering.register(NumberingDefinition::bullet("bullet-list"));

            let mut doc = Document::new(styles, numbering);
            doc.add_paragraph(Paragraph::styled("Heading1").run(Run::text("Obiective")));
            doc.add_paragraph(
                Paragraph::new()
                    .numbered("bullet-list")
                    .run(Run::text("Primul obiectiv")),
            );
            doc
        }

        let first = Package::serialize(&build()).unwrap();
        let second = Package::serialize(&build()).unwrap();
        assert_eq!(
            read_part(&first, "word/document.xml"),
            read_part(&second, "word/document.xml")
        );
        assert_eq!(
            read_part(&first, "word/styles.xml"),
            read_part(&second, "word/styles.xml")
        );
    }

    #[test]
    fn test_two_by_two_table_cells_row_major() {
        let mut doc = empty_doc();
        doc.add_table(
            Table::new(vec![4680, 4680])
                .row(Row::new().cell(Cell::text("unu")).cell(Cell::text("doi")))
                .row(Row::new().cell(Cell::text("trei")).cell(Cell::text("patru"))),
        );

        let bytes = Package::serialize(&doc).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        let cells = extract_cell_texts(&document);
        assert_eq!(cells, vec!["unu", "doi", "trei", "patru"]);
        assert!(cells.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_numbering_survives_page_break() {
        let mut numbering = NumberingRegistry::new();
        numbering.register(NumberingDefinition::decimal("steps"));
        let mut doc = Document::new(StyleRegistry::with_defaults("Arial", 24), numbering);

        doc.add_paragraph(Paragraph::new().numbered("steps").run(Run::text("unu")));
        doc.add_paragraph(Paragraph::new().numbered("steps").run(Run::text("doi")));
        doc.add_page_break();
        doc.add_paragraph(Paragraph::new().numbered("steps").run(Run::text("trei")));

        let bytes = Package::serialize(&doc).unwrap();
        let document = read_part(&bytes, "word/document.xml");

        // All three items share one numId, so the sequence keeps counting
        // across the page break instead of restarting.
        assert_eq!(document.matches("<w:numId w:val=\"1\"/>").count(), 3);
        let break_pos = document.find("<w:br w:type=\"page\"/>").unwrap();
        let last_item = document.find("trei").unwrap();
        assert!(break_pos < last_item);

        let numbering_part = read_part(&bytes, "word/numbering.xml");
        assert_eq!(numbering_part.matches("<w:num ").count(), 1);
    }

    #[test]
    fn test_header_footer_parts_and_references() {
        let mut doc = empty_doc();
        doc.set_header(vec![Paragraph::new().run(Run::text("Săptămâna 4"))]);
        doc.set_footer(vec![
            Paragraph::new()
                .run(Run::text("Pagina "))
                .run(Run::page_number())
                .run(Run::text(" din "))
                .run(Run::page_count()),
        ]);

        let bytes = Package::serialize(&doc).unwrap();

        let content_types = read_part(&bytes, "[Content_Types].xml");
        assert!(content_types.contains("/word/header1.xml"));
        assert!(content_types.contains("/word/footer1.xml"));

        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("<w:headerReference w:type=\"default\" r:id=\"rId2\"/>"));
        assert!(document.contains("<w:footerReference w:type=\"default\" r:id=\"rId3\"/>"));

        let doc_rels = read_part(&bytes, "word/_rels/document.xml.rels");
        assert!(doc_rels.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/header" Target="header1.xml""#));

        let header = read_part(&bytes, "word/header1.xml");
        assert_eq!(extract_texts(&header), vec!["Săptămâna 4"]);

        let footer = read_part(&bytes, "word/footer1.xml");
        assert!(footer.contains(">PAGE</w:instrText>"));
        assert!(footer.contains(">NUMPAGES</w:instrText>"));
    }

    #[test]
    fn test_numbering_part_omitted_when_unused() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("x")));
        let bytes = Package::serialize(&doc).unwrap();

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(&bytes[..])).unwrap();
        assert!(archive.by_name("word/numbering.xml").is_err());
        let content_types = read_part(&bytes, "[Content_Types].xml");
        assert!(!content_types.contains("numbering"));
    }

    #[test]
    fn test_core_properties_metadata() {
        let mut doc = empty_doc();
        doc.set_title("Săptămâna 4 — Protocoale");
        doc.set_creator("ASE CSIE");
        doc.add_paragraph(Paragraph::new().run(Run::text("x")));

        let bytes = Package::serialize(&doc).unwrap();
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Săptămâna 4 — Protocoale</dc:title>"));
        assert!(core.contains("<dc:creator>ASE CSIE</dc:creator>"));
        assert!(core.contains("dcterms:created"));
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("Hello")));
        Package::save(&doc, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert_eq!(extract_texts(&document), vec!["Hello"]);

        // No temporary file left behind.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.docx")]);
    }

    #[test]
    fn test_save_missing_parent_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("x")));

        let err = Package::save(&doc, &path).unwrap_err();
        assert!(matches!(err, DocxError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_failed_validation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::styled("Ghost").run(Run::text("x")));

        assert!(Package::save(&doc, &path).is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
