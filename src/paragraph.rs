/// Paragraph nodes: ordered runs plus block-level formatting.
use crate::error::{DocxError, Result};
use crate::numbering::NumberingRegistry;
use crate::run::Run;
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// A paragraph: an ordered sequence of runs with block formatting.
///
/// Built once as a value and handed to its owner (document body, header,
/// footer, or table cell); never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub(crate) runs: Vec<Run>,
    /// Referenced style id, resolved against the style registry
    pub(crate) style: Option<String>,
    pub(crate) properties: ParagraphProperties,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph referencing a named style.
    pub fn styled(style_id: impl Into<String>) -> Self {
        Self {
            style: Some(style_id.into()),
            ..Self::default()
        }
    }

    /// Append a run.
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append several runs in order.
    pub fn runs(mut self, runs: impl IntoIterator<Item = Run>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.properties.alignment = Some(alignment);
        self
    }

    /// Set spacing before the paragraph in twips.
    pub fn space_before(mut self, twips: u32) -> Self {
        self.properties.space_before = Some(twips);
        self
    }

    /// Set spacing after the paragraph in twips.
    pub fn space_after(mut self, twips: u32) -> Self {
        self.properties.space_after = Some(twips);
        self
    }

    /// Set the left indent in twips.
    pub fn indent_left(mut self, twips: u32) -> Self {
        self.properties.indent_left = Some(twips);
        self
    }

    /// Register this paragraph as a level-0 list item under the named
    /// numbering reference. The name must be registered before
    /// serialization.
    pub fn numbered(mut self, reference: impl Into<String>) -> Self {
        self.properties.numbering_ref = Some(reference.into());
        self
    }

    /// Get the referenced style id, if any.
    #[inline]
    pub fn style_id(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Get the referenced numbering name, if any.
    #[inline]
    pub fn numbering_ref(&self) -> Option<&str> {
        self.properties.numbering_ref.as_deref()
    }

    /// Get the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub(crate) fn to_xml(&self, xml: &mut String, numbering: &NumberingRegistry) -> Result<()> {
        xml.push_str("<w:p>");

        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(ref reference) = self.properties.numbering_ref {
                // Lists are always level 0 in the handouts.
                let num_id = numbering.resolve(reference)?;
                xml.push_str("<w:numPr><w:ilvl w:val=\"0\"/>");
                write!(xml, "<w:numId w:val=\"{}\"/>", num_id)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
                xml.push_str("</w:numPr>");
            }

            if self.properties.space_before.is_some() || self.properties.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.properties.space_before {
                    write!(xml, " w:before=\"{}\"", before)
                        .map_err(|e| DocxError::Xml(e.to_string()))?;
                }
                if let Some(after) = self.properties.space_after {
                    write!(xml, " w:after=\"{}\"", after)
                        .map_err(|e| DocxError::Xml(e.to_string()))?;
                }
                xml.push_str("/>");
            }

            if let Some(left) = self.properties.indent_left {
                write!(xml, "<w:ind w:left=\"{}\"/>", left)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<Alignment>,
    pub(crate) numbering_ref: Option<String>,
    pub(crate) space_before: Option<u32>,
    pub(crate) space_after: Option<u32>,
    pub(crate) indent_left: Option<u32>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some()
            || self.numbering_ref.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.indent_left.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::NumberingDefinition;

    fn render(para: &Paragraph, numbering: &NumberingRegistry) -> String {
        let mut xml = String::new();
        para.to_xml(&mut xml, numbering).unwrap();
        xml
    }

    #[test]
    fn test_plain_paragraph() {
        let para = Paragraph::new().run(Run::text("Hello"));
        let xml = render(&para, &NumberingRegistry::new());
        assert_eq!(xml, "<w:p><w:r><w:t xml:space=\"preserve\">Hello</w:t></w:r></w:p>");
    }

    #[test]
    fn test_styled_paragraph() {
        let para = Paragraph::styled("Heading1").run(Run::text("Introducere"));
        let xml = render(&para, &NumberingRegistry::new());
        assert!(xml.contains("<w:pStyle w:val=\"Heading1\"/>"));
    }

    #[test]
    fn test_alignment_and_spacing() {
        let para = Paragraph::new()
            .align(Alignment::Center)
            .space_before(240)
            .space_after(120)
            .run(Run::text("x"));
        let xml = render(&para, &NumberingRegistry::new());
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:spacing w:before=\"240\" w:after=\"120\"/>"));
    }

    #[test]
    fn test_numbered_paragraph_resolves_id() {
        let mut numbering = NumberingRegistry::new();
        numbering.register(NumberingDefinition::bullet("bullet-list"));
        numbering.register(NumberingDefinition::decimal("steps"));

        let para = Paragraph::new().numbered("steps").run(Run::text("Pasul 1"));
        let xml = render(&para, &numbering);
        assert!(xml.contains("<w:ilvl w:val=\"0\"/>"));
        assert!(xml.contains("<w:numId w:val=\"2\"/>"));
    }

    #[test]
    fn test_numbered_paragraph_unknown_reference_fails() {
        let para = Paragraph::new().numbered("missing").run(Run::text("x"));
        let mut xml = String::new();
        let err = para.to_xml(&mut xml, &NumberingRegistry::new()).unwrap_err();
        assert!(matches!(err, DocxError::UnknownNumbering(_)));
    }

    #[test]
    fn test_run_order_preserved() {
        let para = Paragraph::new()
            .run(Run::text("unu"))
            .run(Run::text("doi").bold())
            .run(Run::text("trei"));
        let xml = render(&para, &NumberingRegistry::new());
        let a = xml.find("unu").unwrap();
        let b = xml.find("doi").unwrap();
        let c = xml.find("trei").unwrap();
        assert!(a < b && b < c);
    }
}
