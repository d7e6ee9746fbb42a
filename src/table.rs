/// Tables with declared column widths, rows, and nested-paragraph cells.
use crate::error::{DocxError, Result};
use crate::numbering::NumberingRegistry;
use crate::paragraph::Paragraph;
use crate::run::Run;
use std::fmt::Write as FmtWrite;

/// Border definition for a table edge.
#[derive(Debug, Clone)]
pub struct TableBorder {
    /// Border width in eighths of a point (e.g. 8 = 1pt)
    pub size: u32,
    /// Border color in hex RGB
    pub color: String,
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            size: 4,
            color: "000000".to_string(),
        }
    }
}

impl TableBorder {
    /// Create a single border of the given width and color.
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

/// A table: declared column widths plus an ordered sequence of rows.
///
/// Every row must carry exactly as many cells as there are declared
/// columns; `validate` enforces this before serialization.
#[derive(Debug, Clone)]
pub struct Table {
    /// Declared column widths in DXA units (twentieths of a point)
    pub(crate) column_widths: Vec<u32>,
    pub(crate) rows: Vec<Row>,
    pub(crate) border: TableBorder,
}

impl Table {
    /// Create an empty table with the given column widths (DXA).
    pub fn new(column_widths: Vec<u32>) -> Self {
        Self {
            column_widths,
            rows: Vec::new(),
            border: TableBorder::default(),
        }
    }

    /// Set the border applied to all six table edges.
    pub fn border(mut self, border: TableBorder) -> Self {
        self.border = border;
        self
    }

    /// Append a row.
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of declared columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Check the table shape: at least one row and one column, and every
    /// row's cell count equal to the declared column count.
    pub fn validate(&self) -> Result<()> {
        if self.column_widths.is_empty() {
            return Err(DocxError::InvalidStructure(
                "table declares no columns".to_string(),
            ));
        }
        if self.rows.is_empty() {
            return Err(DocxError::InvalidStructure(
                "table contains no rows".to_string(),
            ));
        }
        for (idx, row) in self.rows.iter().enumerate() {
            if row.cells.len() != self.column_widths.len() {
                return Err(DocxError::InvalidStructure(format!(
                    "row {} has {} cells, table declares {} columns",
                    idx,
                    row.cells.len(),
                    self.column_widths.len()
                )));
            }
        }
        Ok(())
    }

    fn write_border(&self, xml: &mut String, name: &str) -> Result<()> {
        write!(
            xml,
            "<w:{} w:val=\"single\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
            name, self.border.size, self.border.color
        )
        .map_err(|e| DocxError::Xml(e.to_string()))
    }

    pub(crate) fn to_xml(&self, xml: &mut String, numbering: &NumberingRegistry) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");
        let total: u32 = self.column_widths.iter().sum();
        write!(xml, "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>", total)
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        xml.push_str("<w:tblBorders>");
        for name in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            self.write_border(xml, name)?;
        }
        xml.push_str("</w:tblBorders>");
        xml.push_str("</w:tblPr>");

        xml.push_str("<w:tblGrid>");
        for width in &self.column_widths {
            write!(xml, "<w:gridCol w:w=\"{}\"/>", width)
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }
        xml.push_str("</w:tblGrid>");

        for row in &self.rows {
            row.to_xml(xml, &self.column_widths, numbering)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }
}

/// A table row: an ordered sequence of cells.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub(crate) cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell.
    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn to_xml(
        &self,
        xml: &mut String,
        column_widths: &[u32],
        numbering: &NumberingRegistry,
    ) -> Result<()> {
        xml.push_str("<w:tr>");
        for (idx, cell) in self.cells.iter().enumerate() {
            let width = column_widths.get(idx).copied();
            cell.to_xml(xml, width, numbering)?;
        }
        xml.push_str("</w:tr>");
        Ok(())
    }
}

/// A table cell: a nested sequence of paragraphs, plus optional shading.
///
/// The cell width comes from the table's declared column widths, not from
/// the cell itself.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub(crate) paragraphs: Vec<Paragraph>,
    /// Background shading fill in hex RGB
    pub(crate) shading: Option<String>,
}

impl Cell {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding one plain-text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().paragraph(Paragraph::new().run(Run::text(text)))
    }

    /// Append a paragraph.
    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Set background shading as a hex RGB fill.
    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    fn to_xml(
        &self,
        xml: &mut String,
        width: Option<u32>,
        numbering: &NumberingRegistry,
    ) -> Result<()> {
        xml.push_str("<w:tc>");

        xml.push_str("<w:tcPr>");
        if let Some(width) = width {
            write!(xml, "<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", width)
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }
        if let Some(ref fill) = self.shading {
            write!(
                xml,
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                fill
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }
        xml.push_str("</w:tcPr>");

        if self.paragraphs.is_empty() {
            // A cell must end with a paragraph.
            xml.push_str("<w:p/>");
        } else {
            for para in &self.paragraphs {
                para.to_xml(xml, numbering)?;
            }
        }

        xml.push_str("</w:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_by_two() -> Table {
        Table::new(vec![4680, 4680])
            .row(Row::new().cell(Cell::text("a")).cell(Cell::text("b")))
            .row(Row::new().cell(Cell::text("c")).cell(Cell::text("d")))
    }

    #[test]
    fn test_valid_shape() {
        assert!(two_by_two().validate().is_ok());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = Table::new(vec![1000]).validate().unwrap_err();
        assert!(matches!(err, DocxError::InvalidStructure(_)));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let table = Table::new(Vec::new()).row(Row::new());
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_mismatched_row_rejected() {
        let table = Table::new(vec![1000, 1000])
            .row(Row::new().cell(Cell::text("only one")));
        let err = table.validate().unwrap_err();
        match err {
            DocxError::InvalidStructure(msg) => {
                assert!(msg.contains("row 0"));
                assert!(msg.contains("2 columns"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_table_xml() {
        let mut xml = String::new();
        two_by_two()
            .border(TableBorder::new(1, "999999"))
            .to_xml(&mut xml, &NumberingRegistry::new())
            .unwrap();
        assert!(xml.contains("<w:tblW w:w=\"9360\" w:type=\"dxa\"/>"));
        assert!(xml.contains("<w:top w:val=\"single\" w:sz=\"1\" w:space=\"0\" w:color=\"999999\"/>"));
        assert!(xml.contains("<w:gridCol w:w=\"4680\"/>"));
        assert!(xml.contains("<w:tcW w:w=\"4680\" w:type=\"dxa\"/>"));
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 4);
    }

    #[test]
    fn test_shaded_header_cell() {
        let mut xml = String::new();
        Table::new(vec![2000])
            .row(Row::new().cell(Cell::text("Interval").shading("E8F4FD")))
            .to_xml(&mut xml, &NumberingRegistry::new())
            .unwrap();
        assert!(xml.contains("w:fill=\"E8F4FD\""));
    }

    #[test]
    fn test_empty_cell_gets_placeholder_paragraph() {
        let mut xml = String::new();
        Table::new(vec![2000])
            .row(Row::new().cell(Cell::new()))
            .to_xml(&mut xml, &NumberingRegistry::new())
            .unwrap();
        assert!(xml.contains("<w:p/>"));
    }

    proptest! {
        /// A row passes shape validation iff its cell count matches the
        /// declared column count.
        #[test]
        fn prop_shape_invariant(cols in 1usize..6, cells in 0usize..8) {
            let mut row = Row::new();
            for i in 0..cells {
                row = row.cell(Cell::text(format!("c{i}")));
            }
            let table = Table::new(vec![1000; cols]).row(row);
            prop_assert_eq!(table.validate().is_ok(), cells == cols);
        }
    }
}
