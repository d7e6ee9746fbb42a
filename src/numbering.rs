/// List numbering definitions and the name-to-id registry.
///
/// Paragraphs reference numbering schemes by name (e.g. "bullet-list",
/// "numbered-1"); at serialization time each name resolves to a concrete
/// `numId` in `word/numbering.xml`. Every registered definition gets its own
/// abstract definition, so two decimal lists registered under different
/// names count independently.
use crate::error::{DocxError, Result};
use std::fmt::Write as FmtWrite;

/// List marker format for a numbering definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingFormat {
    /// Bullet markers
    Bullet,
    /// Sequential decimal markers (1. 2. 3. ...)
    Decimal,
}

impl NumberingFormat {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Decimal => "decimal",
        }
    }

    /// Level text template for level 0.
    pub(crate) fn level_text(&self) -> &'static str {
        match self {
            Self::Bullet => "\u{2022}",
            Self::Decimal => "%1.",
        }
    }
}

/// A named list-numbering scheme.
///
/// Only level 0 is used; the handouts never nest lists.
#[derive(Debug, Clone)]
pub struct NumberingDefinition {
    pub(crate) reference: String,
    pub(crate) format: NumberingFormat,
    /// Left indent of the list item in twips
    pub(crate) indent_left: u32,
    /// Hanging indent of the marker in twips
    pub(crate) hanging: u32,
}

impl NumberingDefinition {
    /// Create a bullet scheme with the conventional 720/360 twip indents.
    pub fn bullet(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            format: NumberingFormat::Bullet,
            indent_left: 720,
            hanging: 360,
        }
    }

    /// Create a decimal scheme with the conventional 720/360 twip indents.
    pub fn decimal(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            format: NumberingFormat::Decimal,
            indent_left: 720,
            hanging: 360,
        }
    }

    /// Override the level-0 indentation (twips).
    pub fn indent(mut self, left: u32, hanging: u32) -> Self {
        self.indent_left = left;
        self.hanging = hanging;
        self
    }

    /// Get the reference name.
    #[inline]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

/// Registry mapping numbering reference names to definitions.
///
/// Populated before any content is declared; content references resolve
/// against it at serialization time and fail if undeclared.
#[derive(Debug, Default)]
pub struct NumberingRegistry {
    definitions: Vec<NumberingDefinition>,
}

impl NumberingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a numbering definition. A re-registered name replaces the
    /// earlier definition but keeps its id.
    pub fn register(&mut self, definition: NumberingDefinition) {
        if let Some(existing) = self
            .definitions
            .iter_mut()
            .find(|d| d.reference == definition.reference)
        {
            *existing = definition;
        } else {
            self.definitions.push(definition);
        }
    }

    /// Check whether a reference name is registered.
    pub fn contains(&self, reference: &str) -> bool {
        self.definitions.iter().any(|d| d.reference == reference)
    }

    /// Resolve a reference name to its concrete `numId` (1-based).
    pub fn resolve(&self, reference: &str) -> Result<u32> {
        self.definitions
            .iter()
            .position(|d| d.reference == reference)
            .map(|idx| idx as u32 + 1)
            .ok_or_else(|| DocxError::UnknownNumbering(reference.to_string()))
    }

    /// Whether any definitions are registered (controls part emission).
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Generate the complete `word/numbering.xml` part.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );

        // Abstract definitions first, then the concrete instances; Word
        // requires this ordering.
        for (idx, def) in self.definitions.iter().enumerate() {
            write!(xml, r#"<w:abstractNum w:abstractNumId="{}">"#, idx)
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            xml.push_str(r#"<w:multiLevelType w:val="singleLevel"/>"#);
            xml.push_str(r#"<w:lvl w:ilvl="0">"#);
            xml.push_str(r#"<w:start w:val="1"/>"#);
            write!(xml, r#"<w:numFmt w:val="{}"/>"#, def.format.as_str())
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            write!(xml, r#"<w:lvlText w:val="{}"/>"#, def.format.level_text())
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
            write!(
                xml,
                r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
                def.indent_left, def.hanging
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
            xml.push_str("</w:lvl>");
            xml.push_str("</w:abstractNum>");
        }

        for idx in 0..self.definitions.len() {
            write!(
                xml,
                r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
                idx + 1,
                idx
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        xml.push_str("</w:numbering>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_assigns_sequential_ids() {
        let mut reg = NumberingRegistry::new();
        reg.register(NumberingDefinition::bullet("bullet-list"));
        reg.register(NumberingDefinition::decimal("numbered-1"));
        reg.register(NumberingDefinition::decimal("numbered-2"));

        assert_eq!(reg.resolve("bullet-list").unwrap(), 1);
        assert_eq!(reg.resolve("numbered-1").unwrap(), 2);
        assert_eq!(reg.resolve("numbered-2").unwrap(), 3);
    }

    #[test]
    fn test_resolve_unknown_fails() {
        let reg = NumberingRegistry::new();
        let err = reg.resolve("missing").unwrap_err();
        assert!(matches!(err, DocxError::UnknownNumbering(ref name) if name == "missing"));
    }

    #[test]
    fn test_reregister_keeps_id() {
        let mut reg = NumberingRegistry::new();
        reg.register(NumberingDefinition::bullet("list"));
        reg.register(NumberingDefinition::decimal("list"));
        assert_eq!(reg.resolve("list").unwrap(), 1);
        assert!(reg.to_xml().unwrap().contains(r#"<w:numFmt w:val="decimal"/>"#));
    }

    #[test]
    fn test_numbering_xml_structure() {
        let mut reg = NumberingRegistry::new();
        reg.register(NumberingDefinition::bullet("bullet-list"));
        reg.register(NumberingDefinition::decimal("steps").indent(1080, 360));

        let xml = reg.to_xml().unwrap();
        assert!(xml.contains(r#"<w:abstractNum w:abstractNumId="0">"#));
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains(r#"<w:lvlText w:val="%1."/>"#));
        assert!(xml.contains(r#"<w:ind w:left="1080" w:hanging="360"/>"#));
        assert!(xml.contains(r#"<w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>"#));
        // Abstract definitions precede instances.
        let abs = xml.find("<w:abstractNum").unwrap();
        let num = xml.find("<w:num ").unwrap();
        assert!(abs < num);
    }
}
