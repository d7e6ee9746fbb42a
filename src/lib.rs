//! Programmatic builder for Word (.docx) lecture handouts.
//!
//! The crate models a document as a tree of owned values: a [`Document`]
//! holds style and numbering registries, section geometry, optional
//! header/footer paragraph lists, and an ordered body of paragraphs,
//! tables, and page breaks. [`Package`] validates the tree and serializes
//! it to an OOXML package in one pass.
//!
//! ```no_run
//! use catedra::{Document, NumberingRegistry, Package, Paragraph, Run, StyleRegistry};
//!
//! # fn main() -> catedra::Result<()> {
//! let mut doc = Document::new(
//!     StyleRegistry::with_defaults("Arial", 24),
//!     NumberingRegistry::new(),
//! );
//! doc.add_paragraph(Paragraph::new().run(Run::text("Hello")));
//! Package::save(&doc, "hello.docx")?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod numbering;
pub mod package;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod style;
pub mod table;

pub use document::{BodyElement, Document};
pub use error::{DocxError, Result};
pub use numbering::{NumberingDefinition, NumberingFormat, NumberingRegistry};
pub use package::Package;
pub use paragraph::{Alignment, Paragraph};
pub use run::Run;
pub use section::SectionProperties;
pub use style::{Style, StyleRegistry};
pub use table::{Cell, Row, Table, TableBorder};
