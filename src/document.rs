/// The document root aggregate.
use crate::error::{DocxError, Result};
use crate::numbering::NumberingRegistry;
use crate::package::RelationshipMap;
use crate::paragraph::Paragraph;
use crate::section::SectionProperties;
use crate::style::StyleRegistry;
use crate::table::Table;
use std::fmt::Write as FmtWrite;

/// A block-level content node in the document body.
#[derive(Debug, Clone)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// A handout document.
///
/// Construction is two-phase: the style and numbering registries are fully
/// populated first and taken by value, then content is appended in reading
/// order. Body order is preserved exactly in the serialized artifact.
pub struct Document {
    styles: StyleRegistry,
    numbering: NumberingRegistry,
    section: SectionProperties,
    header: Option<Vec<Paragraph>>,
    footer: Option<Vec<Paragraph>>,
    body: Vec<BodyElement>,
    title: Option<String>,
    creator: Option<String>,
}

impl Document {
    /// Create a document over fully populated registries.
    pub fn new(styles: StyleRegistry, numbering: NumberingRegistry) -> Self {
        Self {
            styles,
            numbering,
            section: SectionProperties::default(),
            header: None,
            footer: None,
            body: Vec::new(),
            title: None,
            creator: None,
        }
    }

    /// Replace the section properties (page size, margins).
    pub fn set_section(&mut self, section: SectionProperties) {
        self.section = section;
    }

    /// Set the document title recorded in the core properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the document creator recorded in the core properties.
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.creator = Some(creator.into());
    }

    /// Append a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(BodyElement::Paragraph(paragraph));
    }

    /// Append a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(BodyElement::Table(table));
    }

    /// Append a page break to the body.
    pub fn add_page_break(&mut self) {
        self.body.push(BodyElement::PageBreak);
    }

    /// Set the default page header.
    pub fn set_header(&mut self, paragraphs: Vec<Paragraph>) {
        self.header = Some(paragraphs);
    }

    /// Set the default page footer.
    pub fn set_footer(&mut self, paragraphs: Vec<Paragraph>) {
        self.footer = Some(paragraphs);
    }

    /// Check if the document has a header.
    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    /// Check if the document has a footer.
    pub fn has_footer(&self) -> bool {
        self.footer.is_some()
    }

    /// Get the number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.body
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    /// Get the number of body tables.
    pub fn table_count(&self) -> usize {
        self.body
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    #[inline]
    pub(crate) fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    #[inline]
    pub(crate) fn numbering(&self) -> &NumberingRegistry {
        &self.numbering
    }

    #[inline]
    pub(crate) fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub(crate) fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// Validate every style and numbering reference and every table shape.
    ///
    /// Runs before any serialization output is produced, so a bad reference
    /// never yields a half-written artifact.
    pub fn validate(&self) -> Result<()> {
        for element in &self.body {
            match element {
                BodyElement::Paragraph(para) => self.validate_paragraph(para)?,
                BodyElement::Table(table) => {
                    table.validate()?;
                    for row in &table.rows {
                        for cell in &row.cells {
                            for para in &cell.paragraphs {
                                self.validate_paragraph(para)?;
                            }
                        }
                    }
                },
                BodyElement::PageBreak => {},
            }
        }
        for para in self.header.iter().flatten() {
            self.validate_paragraph(para)?;
        }
        for para in self.footer.iter().flatten() {
            self.validate_paragraph(para)?;
        }
        Ok(())
    }

    fn validate_paragraph(&self, para: &Paragraph) -> Result<()> {
        if let Some(style_id) = para.style_id()
            && !self.styles.contains(style_id)
        {
            return Err(DocxError::UnknownStyle(style_id.to_string()));
        }
        if let Some(reference) = para.numbering_ref() {
            self.numbering.resolve(reference)?;
        }
        Ok(())
    }

    /// Generate the `word/document.xml` part, including the trailing
    /// section properties with header/footer references.
    pub(crate) fn to_xml(&self, rels: &RelationshipMap) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        xml.push_str("<w:body>");

        for element in &self.body {
            match element {
                BodyElement::Paragraph(para) => para.to_xml(&mut xml, &self.numbering)?,
                BodyElement::Table(table) => table.to_xml(&mut xml, &self.numbering)?,
                BodyElement::PageBreak => {
                    xml.push_str("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>");
                },
            }
        }

        self.write_section_properties(&mut xml, rels)?;

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    /// The sectPr must be the last element in the body.
    fn write_section_properties(&self, xml: &mut String, rels: &RelationshipMap) -> Result<()> {
        xml.push_str("<w:sectPr>");

        if let Some(header_id) = rels.header_id() {
            write!(
                xml,
                r#"<w:headerReference w:type="default" r:id="{}"/>"#,
                header_id
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        if let Some(footer_id) = rels.footer_id() {
            write!(
                xml,
                r#"<w:footerReference w:type="default" r:id="{}"/>"#,
                footer_id
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            self.section.page_width, self.section.page_height
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;

        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}"/>"#,
            self.section.margin_top,
            self.section.margin_right,
            self.section.margin_bottom,
            self.section.margin_left,
            self.section.header_distance,
            self.section.footer_distance
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;

        xml.push_str("</w:sectPr>");
        Ok(())
    }

    /// Generate the `word/header1.xml` part, if a header is set.
    pub(crate) fn header_xml(&self) -> Result<Option<String>> {
        let Some(ref paragraphs) = self.header else {
            return Ok(None);
        };
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );
        if paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            for para in paragraphs {
                para.to_xml(&mut xml, &self.numbering)?;
            }
        }
        xml.push_str("</w:hdr>");
        Ok(Some(xml))
    }

    /// Generate the `word/footer1.xml` part, if a footer is set.
    pub(crate) fn footer_xml(&self) -> Result<Option<String>> {
        let Some(ref paragraphs) = self.footer else {
            return Ok(None);
        };
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:ftr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );
        if paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            for para in paragraphs {
                para.to_xml(&mut xml, &self.numbering)?;
            }
        }
        xml.push_str("</w:ftr>");
        Ok(Some(xml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::NumberingDefinition;
    use crate::run::Run;
    use crate::style::Style;
    use crate::table::{Cell, Row, Table};

    fn empty_doc() -> Document {
        Document::new(
            StyleRegistry::with_defaults("Arial", 24),
            NumberingRegistry::new(),
        )
    }

    #[test]
    fn test_counts() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("a")));
        doc.add_page_break();
        doc.add_paragraph(Paragraph::new().run(Run::text("b")));
        doc.add_table(Table::new(vec![1000]).row(Row::new().cell(Cell::text("c"))));
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_validate_unknown_style() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::styled("Ghost").run(Run::text("x")));
        let err = doc.validate().unwrap_err();
        assert!(matches!(err, DocxError::UnknownStyle(ref id) if id == "Ghost"));
    }

    #[test]
    fn test_validate_unknown_style_in_cell() {
        let mut doc = empty_doc();
        let cell = Cell::new().paragraph(Paragraph::styled("Ghost").run(Run::text("x")));
        doc.add_table(Table::new(vec![1000]).row(Row::new().cell(cell)));
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_numbering_in_footer() {
        let mut doc = empty_doc();
        doc.set_footer(vec![Paragraph::new().numbered("missing").run(Run::text("x"))]);
        let err = doc.validate().unwrap_err();
        assert!(matches!(err, DocxError::UnknownNumbering(_)));
    }

    #[test]
    fn test_validate_table_shape() {
        let mut doc = empty_doc();
        doc.add_table(Table::new(vec![1000, 1000]).row(Row::new().cell(Cell::text("x"))));
        assert!(matches!(
            doc.validate().unwrap_err(),
            DocxError::InvalidStructure(_)
        ));
    }

    #[test]
    fn test_validate_known_references() {
        let mut styles = StyleRegistry::with_defaults("Arial", 24);
        styles.register(Style::new("Title", "Title"));
        let mut numbering = NumberingRegistry::new();
        numbering.register(NumberingDefinition::decimal("steps"));

        let mut doc = Document::new(styles, numbering);
        doc.add_paragraph(Paragraph::styled("Title").run(Run::text("t")));
        doc.add_paragraph(Paragraph::new().numbered("steps").run(Run::text("1")));
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_body_order_preserved() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("first")));
        doc.add_table(Table::new(vec![1000]).row(Row::new().cell(Cell::text("second"))));
        doc.add_paragraph(Paragraph::new().run(Run::text("third")));

        let xml = doc.to_xml(&RelationshipMap::default()).unwrap();
        let a = xml.find("first").unwrap();
        let b = xml.find("second").unwrap();
        let c = xml.find("third").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_sectpr_is_last_body_element() {
        let mut doc = empty_doc();
        doc.add_paragraph(Paragraph::new().run(Run::text("x")));
        let xml = doc.to_xml(&RelationshipMap::default()).unwrap();
        let sect = xml.find("<w:sectPr>").unwrap();
        assert!(sect < xml.find("</w:body>").unwrap());
        assert!(sect > xml.rfind("</w:p>").unwrap());
    }

    #[test]
    fn test_header_footer_xml() {
        let mut doc = empty_doc();
        assert!(doc.header_xml().unwrap().is_none());

        doc.set_header(vec![
            Paragraph::new().run(Run::text("Rețele de Calculatoare")),
        ]);
        doc.set_footer(vec![Paragraph::new().run(Run::page_number())]);

        let header = doc.header_xml().unwrap().unwrap();
        assert!(header.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:hdr"#));
        assert!(header.contains("Rețele de Calculatoare"));

        let footer = doc.footer_xml().unwrap().unwrap();
        assert!(footer.contains("PAGE"));
    }

    #[test]
    fn test_page_break_rendering() {
        let mut doc = empty_doc();
        doc.add_page_break();
        let xml = doc.to_xml(&RelationshipMap::default()).unwrap();
        assert!(xml.contains("<w:br w:type=\"page\"/>"));
    }
}
