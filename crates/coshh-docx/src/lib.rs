//! Minimal WordprocessingML handling for COSHH templates.
//!
//! Covers exactly what form assembly needs: load a `.docx` package, address
//! body tables by index, rewrite cell text, deep-clone rows, splice cell
//! content structurally, and serialize back to bytes. Everything else in the
//! package is opaque and round-trips untouched.

pub mod document;
pub mod error;
pub mod package;
pub mod xml;

pub use document::{CellMut, CellRef, Document, RowMut, RowRef, TableMut, TableRef};
pub use error::{DocxError, Result};
pub use package::DocxPackage;
pub use xml::{XmlElement, XmlNode};
