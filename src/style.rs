/// Named paragraph styles and the style registry.
///
/// Styles bundle run and paragraph formatting under an id ("Title",
/// "Heading1", "InstructorNote", ...). Content references them by id; the
/// registry must be fully populated before the document is serialized, and
/// unresolved references are rejected rather than silently dropped.
use crate::error::{DocxError, Result};
use crate::paragraph::Alignment;
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A named paragraph style definition.
#[derive(Debug, Clone)]
pub struct Style {
    /// Style identifier, referenced by content nodes (e.g. "Heading1")
    style_id: String,
    /// UI-visible name (e.g. "Heading 1")
    name: String,
    /// Id of the style this is based on
    based_on: Option<String>,
    /// Font family name
    font_name: Option<String>,
    /// Font size in half-points (e.g. 24 = 12pt)
    font_size: Option<u32>,
    bold: bool,
    italic: bool,
    /// Font color in hex RGB
    color: Option<String>,
    alignment: Option<Alignment>,
    /// Space before the paragraph in twips
    space_before: Option<u32>,
    /// Space after the paragraph in twips
    space_after: Option<u32>,
    /// Left indent in twips
    indent_left: Option<u32>,
    /// Paragraph background shading fill in hex RGB
    shading: Option<String>,
    /// Outline level for headings (0 = Heading 1)
    outline_level: Option<u8>,
}

impl Style {
    /// Create a style with the given id and display name, based on "Normal".
    pub fn new(style_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            based_on: Some("Normal".to_string()),
            font_name: None,
            font_size: None,
            bold: false,
            italic: false,
            color: None,
            alignment: None,
            space_before: None,
            space_after: None,
            indent_left: None,
            shading: None,
            outline_level: None,
        }
    }

    /// Get the style identifier.
    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Set the base style id.
    pub fn based_on(mut self, style_id: impl Into<String>) -> Self {
        self.based_on = Some(style_id.into());
        self
    }

    /// Set the font family name.
    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set the font size in half-points (e.g. 56 = 28pt).
    pub fn size(mut self, half_points: u32) -> Self {
        self.font_size = Some(half_points);
        self
    }

    /// Set bold formatting.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic formatting.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the font color as hex RGB (e.g. "1A365D").
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the paragraph alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set space before the paragraph in twips.
    pub fn space_before(mut self, twips: u32) -> Self {
        self.space_before = Some(twips);
        self
    }

    /// Set space after the paragraph in twips.
    pub fn space_after(mut self, twips: u32) -> Self {
        self.space_after = Some(twips);
        self
    }

    /// Set the left indent in twips.
    pub fn indent_left(mut self, twips: u32) -> Self {
        self.indent_left = Some(twips);
        self
    }

    /// Set the paragraph background shading fill as hex RGB.
    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    /// Set the heading outline level (0 = Heading 1).
    pub fn outline_level(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }

    /// Generate the `<w:style>` element for this definition.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);

        write!(
            &mut xml,
            r#"<w:style w:type="paragraph" w:styleId="{}">"#,
            escape_xml(&self.style_id)
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;

        write!(&mut xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))
            .map_err(|e| DocxError::Xml(e.to_string()))?;

        if let Some(ref based_on) = self.based_on {
            write!(&mut xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        xml.push_str("<w:qFormat/>");

        let has_para_props = self.alignment.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.indent_left.is_some()
            || self.shading.is_some()
            || self.outline_level.is_some();

        if has_para_props {
            xml.push_str("<w:pPr>");

            if self.space_before.is_some() || self.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.space_before {
                    write!(&mut xml, r#" w:before="{}""#, before)
                        .map_err(|e| DocxError::Xml(e.to_string()))?;
                }
                if let Some(after) = self.space_after {
                    write!(&mut xml, r#" w:after="{}""#, after)
                        .map_err(|e| DocxError::Xml(e.to_string()))?;
                }
                xml.push_str("/>");
            }

            if let Some(left) = self.indent_left {
                write!(&mut xml, r#"<w:ind w:left="{}"/>"#, left)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(ref fill) = self.shading {
                write!(
                    &mut xml,
                    r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                    fill
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(alignment) = self.alignment {
                write!(&mut xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(level) = self.outline_level {
                write!(&mut xml, r#"<w:outlineLvl w:val="{}"/>"#, level)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            xml.push_str("</w:pPr>");
        }

        let has_run_props = self.font_name.is_some()
            || self.font_size.is_some()
            || self.bold
            || self.italic
            || self.color.is_some();

        if has_run_props {
            xml.push_str("<w:rPr>");

            if let Some(ref font_name) = self.font_name {
                write!(
                    &mut xml,
                    r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                    escape_xml(font_name),
                    escape_xml(font_name),
                    escape_xml(font_name)
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if self.bold {
                xml.push_str("<w:b/>");
            }

            if self.italic {
                xml.push_str("<w:i/>");
            }

            if let Some(size) = self.font_size {
                write!(&mut xml, r#"<w:sz w:val="{}"/>"#, size)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
                write!(&mut xml, r#"<w:szCs w:val="{}"/>"#, size)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(ref color) = self.color {
                write!(&mut xml, r#"<w:color w:val="{}"/>"#, escape_xml(color))
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");
        Ok(xml)
    }
}

/// Registry mapping style ids to definitions.
///
/// Carries the document-default run font and size (the `docDefaults` block
/// of `styles.xml`) and implicitly defines the base "Normal" style from
/// them, since every registered style is based on something.
#[derive(Debug)]
pub struct StyleRegistry {
    default_font: String,
    /// Default font size in half-points
    default_size: u32,
    styles: Vec<Style>,
}

impl StyleRegistry {
    /// Create a registry with the given document-default run font and size
    /// (half-points).
    pub fn with_defaults(font: impl Into<String>, half_points: u32) -> Self {
        Self {
            default_font: font.into(),
            default_size: half_points,
            styles: Vec::new(),
        }
    }

    /// Register a style definition. A re-registered id replaces the earlier
    /// definition.
    pub fn register(&mut self, style: Style) {
        if let Some(existing) = self
            .styles
            .iter_mut()
            .find(|s| s.style_id == style.style_id)
        {
            *existing = style;
        } else {
            self.styles.push(style);
        }
    }

    /// Check whether a style id is registered. "Normal" is always present.
    pub fn contains(&self, style_id: &str) -> bool {
        style_id == "Normal" || self.styles.iter().any(|s| s.style_id == style_id)
    }

    /// Resolve a style id to its definition.
    pub fn resolve(&self, style_id: &str) -> Result<&Style> {
        self.styles
            .iter()
            .find(|s| s.style_id == style_id)
            .ok_or_else(|| DocxError::UnknownStyle(style_id.to_string()))
    }

    /// Generate the complete `word/styles.xml` part.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );

        xml.push_str("<w:docDefaults>");
        xml.push_str("<w:rPrDefault><w:rPr>");
        write!(
            &mut xml,
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            escape_xml(&self.default_font)
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;
        write!(&mut xml, r#"<w:sz w:val="{}"/>"#, self.default_size)
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        write!(&mut xml, r#"<w:szCs w:val="{}"/>"#, self.default_size)
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        xml.push_str("</w:rPr></w:rPrDefault>");
        xml.push_str("<w:pPrDefault/>");
        xml.push_str("</w:docDefaults>");

        // The base style everything else hangs off.
        xml.push_str(
            r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1"><w:name w:val="Normal"/></w:style>"#,
        );

        for style in &self.styles {
            xml.push_str(&style.to_xml()?);
        }

        xml.push_str("</w:styles>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut reg = StyleRegistry::with_defaults("Arial", 24);
        reg.register(Style::new("Title", "Title").size(56).bold().color("1A365D"));

        let style = reg.resolve("Title").unwrap();
        assert_eq!(style.style_id(), "Title");
        assert!(reg.contains("Title"));
        assert!(reg.contains("Normal"));
    }

    #[test]
    fn test_resolve_unknown_fails() {
        let reg = StyleRegistry::with_defaults("Arial", 24);
        let err = reg.resolve("Ghost").unwrap_err();
        assert!(matches!(err, DocxError::UnknownStyle(ref id) if id == "Ghost"));
    }

    #[test]
    fn test_style_xml() {
        let style = Style::new("InstructorNote", "Instructor Note")
            .size(22)
            .italic()
            .color("666666")
            .indent_left(720)
            .shading("FFF8E1")
            .space_before(100)
            .space_after(100);

        let xml = style.to_xml().unwrap();
        assert!(xml.contains(r#"w:styleId="InstructorNote""#));
        assert!(xml.contains(r#"<w:basedOn w:val="Normal"/>"#));
        assert!(xml.contains(r#"<w:i/>"#));
        assert!(xml.contains(r#"w:fill="FFF8E1""#));
        assert!(xml.contains(r#"w:before="100" w:after="100""#));
        assert!(xml.contains(r#"<w:ind w:left="720"/>"#));
    }

    #[test]
    fn test_heading_outline_level() {
        let xml = Style::new("Heading1", "Heading 1")
            .size(36)
            .bold()
            .outline_level(0)
            .to_xml()
            .unwrap();
        assert!(xml.contains(r#"<w:outlineLvl w:val="0"/>"#));
    }

    #[test]
    fn test_styles_xml_defaults() {
        let mut reg = StyleRegistry::with_defaults("Calibri", 22);
        reg.register(Style::new("Heading1", "Heading 1"));

        let xml = reg.to_xml().unwrap();
        assert!(xml.contains("<w:docDefaults>"));
        assert!(xml.contains(r#"w:ascii="Calibri""#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
        assert!(xml.contains(r#"w:styleId="Normal" w:default="1""#));
        assert!(xml.contains(r#"w:styleId="Heading1""#));
    }

    #[test]
    fn test_xml_escaping() {
        let xml = Style::new("A&B", "Name <x>").to_xml().unwrap();
        assert!(xml.contains("A&amp;B"));
        assert!(xml.contains("Name &lt;x&gt;"));
    }
}
