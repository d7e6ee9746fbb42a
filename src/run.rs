/// Text runs and inline formatting for handout paragraphs.
use crate::error::{DocxError, Result};
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Run content type.
#[derive(Debug, Clone)]
pub(crate) enum RunContent {
    /// Plain text
    Text(String),
    /// Current page number field (PAGE)
    PageNumber,
    /// Total page count field (NUMPAGES)
    PageCount,
}

/// A text run: a span of text sharing one set of inline formatting.
///
/// Runs are immutable values built bottom-up with the chaining
/// constructors and owned by exactly one paragraph.
#[derive(Debug, Clone)]
pub struct Run {
    pub(crate) content: RunContent,
    pub(crate) properties: RunProperties,
}

impl Run {
    /// Create a plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            properties: RunProperties::default(),
        }
    }

    /// Create a current-page-number field run.
    pub fn page_number() -> Self {
        Self {
            content: RunContent::PageNumber,
            properties: RunProperties::default(),
        }
    }

    /// Create a total-page-count field run.
    pub fn page_count() -> Self {
        Self {
            content: RunContent::PageCount,
            properties: RunProperties::default(),
        }
    }

    /// Make the run bold.
    pub fn bold(mut self) -> Self {
        self.properties.bold = true;
        self
    }

    /// Make the run italic.
    pub fn italic(mut self) -> Self {
        self.properties.italic = true;
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn size(mut self, half_points: u32) -> Self {
        self.properties.font_size = Some(half_points);
        self
    }

    /// Set font family name.
    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.properties.font_name = Some(name.into());
        self
    }

    /// Set text color as hex RGB (e.g., "FF0000" for red).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.properties.color = Some(color.into());
        self
    }

    /// Set run background shading as a hex RGB fill.
    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.properties.shading = Some(fill.into());
        self
    }

    fn write_rpr(&self, xml: &mut String) -> Result<()> {
        if !self.properties.has_properties() {
            return Ok(());
        }
        xml.push_str("<w:rPr>");

        if let Some(ref font_name) = self.properties.font_name {
            write!(
                xml,
                "<w:rFonts w:ascii=\"{}\" w:hAnsi=\"{}\"/>",
                escape_xml(font_name),
                escape_xml(font_name)
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        if self.properties.bold {
            xml.push_str("<w:b/>");
        }

        if self.properties.italic {
            xml.push_str("<w:i/>");
        }

        if let Some(size) = self.properties.font_size {
            write!(xml, "<w:sz w:val=\"{}\"/>", size)
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        if let Some(ref color) = self.properties.color {
            write!(xml, "<w:color w:val=\"{}\"/>", color)
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        if let Some(ref fill) = self.properties.shading {
            write!(
                xml,
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                fill
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        xml.push_str("</w:rPr>");
        Ok(())
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");
        self.write_rpr(xml)?;

        match &self.content {
            RunContent::Text(text) if !text.is_empty() => {
                write!(
                    xml,
                    "<w:t xml:space=\"preserve\">{}</w:t>",
                    escape_xml(text)
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            },
            RunContent::PageNumber => {
                self.write_field(xml, "PAGE")?;
            },
            RunContent::PageCount => {
                self.write_field(xml, "NUMPAGES")?;
            },
            _ => {},
        }

        xml.push_str("</w:r>");
        Ok(())
    }

    /// Emit a complete field-char sequence (begin / instruction / separate /
    /// placeholder / end). The run formatting is repeated on each segment so
    /// the rendered number picks it up.
    fn write_field(&self, xml: &mut String, instruction: &str) -> Result<()> {
        xml.push_str("<w:fldChar w:fldCharType=\"begin\"/></w:r><w:r>");
        self.write_rpr(xml)?;
        write!(
            xml,
            "<w:instrText xml:space=\"preserve\">{}</w:instrText></w:r><w:r>",
            instruction
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;
        self.write_rpr(xml)?;
        xml.push_str("<w:fldChar w:fldCharType=\"separate\"/></w:r><w:r>");
        self.write_rpr(xml)?;
        xml.push_str("<w:t>1</w:t></w:r><w:r>");
        self.write_rpr(xml)?;
        xml.push_str("<w:fldChar w:fldCharType=\"end\"/>");
        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) font_size: Option<u32>,
    pub(crate) font_name: Option<String>,
    pub(crate) color: Option<String>,
    pub(crate) shading: Option<String>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold
            || self.italic
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.color.is_some()
            || self.shading.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: &Run) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_text_run() {
        let xml = render(&Run::text("Hello"));
        assert_eq!(xml, "<w:r><w:t xml:space=\"preserve\">Hello</w:t></w:r>");
    }

    #[test]
    fn test_run_formatting() {
        let xml = render(&Run::text("x").bold().italic().size(24).font("Arial"));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:i/>"));
        assert!(xml.contains("<w:sz w:val=\"24\"/>"));
        assert!(xml.contains("w:ascii=\"Arial\""));
    }

    #[test]
    fn test_inline_code_shading() {
        let xml = render(&Run::text("recv()").font("Consolas").shading("F0F0F0"));
        assert!(xml.contains("w:fill=\"F0F0F0\""));
    }

    #[test]
    fn test_xml_escaping() {
        let xml = render(&Run::text("a < b & c > \"d\""));
        assert!(xml.contains("a &lt; b &amp; c &gt; &quot;d&quot;"));
        assert!(!xml.contains("a < b"));
    }

    #[test]
    fn test_page_number_field() {
        let xml = render(&Run::page_number().size(20));
        assert!(xml.contains("w:fldCharType=\"begin\""));
        assert!(xml.contains(">PAGE</w:instrText>"));
        assert!(xml.contains("w:fldCharType=\"end\""));
    }

    #[test]
    fn test_page_count_field() {
        let xml = render(&Run::page_count());
        assert!(xml.contains(">NUMPAGES</w:instrText>"));
    }
}
