//! Typed table/row/cell addressing over a parsed WordprocessingML body.

use crate::error::{DocxError, Result};
use crate::xml::{XmlElement, XmlNode};

/// A parsed `word/document.xml` with addressable body tables.
///
/// Every structural access is index-checked; a template that lacks an
/// expected table, row, or cell surfaces the failing index instead of
/// panicking, and the whole request is aborted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: XmlElement,
}

impl Document {
    /// Parse a document from its `word/document.xml` source. Also the entry
    /// point tests use to build synthetic templates without a zip container.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root = crate::xml::parse_document(xml, "word/document.xml")?;
        let document = Self { root };
        document.body()?;
        Ok(document)
    }

    #[must_use]
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    fn body(&self) -> Result<&XmlElement> {
        self.root
            .child_elements()
            .find(|element| element.is("body"))
            .ok_or(DocxError::MissingBody)
    }

    fn body_mut(&mut self) -> Result<&mut XmlElement> {
        self.root
            .child_elements_mut()
            .find(|element| element.is("body"))
            .ok_or(DocxError::MissingBody)
    }

    /// Number of top-level tables in the body.
    pub fn table_count(&self) -> Result<usize> {
        Ok(self.body()?.child_elements().filter(|e| e.is("tbl")).count())
    }

    /// Read-only view of the body table at `index`, in document order.
    pub fn table(&self, index: usize) -> Result<TableRef<'_>> {
        let count = self.table_count()?;
        self.body()?
            .child_elements()
            .filter(|element| element.is("tbl"))
            .nth(index)
            .map(|element| TableRef { element, index })
            .ok_or(DocxError::TableOutOfRange {
                table: index,
                count,
            })
    }

    /// Mutable view of the body table at `index`.
    pub fn table_mut(&mut self, index: usize) -> Result<TableMut<'_>> {
        let count = self.table_count()?;
        self.body_mut()?
            .child_elements_mut()
            .filter(|element| element.is("tbl"))
            .nth(index)
            .map(|element| TableMut { element, index })
            .ok_or(DocxError::TableOutOfRange {
                table: index,
                count,
            })
    }
}

fn row_elements(table: &XmlElement) -> impl Iterator<Item = &XmlElement> {
    table.child_elements().filter(|element| element.is("tr"))
}

fn cell_elements(row: &XmlElement) -> impl Iterator<Item = &XmlElement> {
    row.child_elements().filter(|element| element.is("tc"))
}

/// Read-only table view.
#[derive(Debug, Clone, Copy)]
pub struct TableRef<'a> {
    element: &'a XmlElement,
    index: usize,
}

impl<'a> TableRef<'a> {
    #[must_use]
    pub fn row_count(&self) -> usize {
        row_elements(self.element).count()
    }

    pub fn row(&self, row: usize) -> Result<RowRef<'a>> {
        row_elements(self.element)
            .nth(row)
            .map(|element| RowRef {
                element,
                table: self.index,
                index: row,
            })
            .ok_or(DocxError::RowOutOfRange {
                table: self.index,
                row,
                count: self.row_count(),
            })
    }
}

/// Read-only row view.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    element: &'a XmlElement,
    table: usize,
    index: usize,
}

impl<'a> RowRef<'a> {
    #[must_use]
    pub fn cell_count(&self) -> usize {
        cell_elements(self.element).count()
    }

    pub fn cell(&self, cell: usize) -> Result<CellRef<'a>> {
        cell_elements(self.element)
            .nth(cell)
            .map(|element| CellRef { element })
            .ok_or(DocxError::CellOutOfRange {
                table: self.table,
                row: self.index,
                cell,
                count: self.cell_count(),
            })
    }
}

/// Read-only cell view, the source side of a structural splice.
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a> {
    element: &'a XmlElement,
}

impl CellRef<'_> {
    /// The cell's child nodes (properties and block content).
    #[must_use]
    pub fn content(&self) -> &[XmlNode] {
        &self.element.children
    }

    /// Human-visible text of the cell.
    #[must_use]
    pub fn text(&self) -> String {
        self.element.visible_text()
    }
}

/// Mutable table view.
#[derive(Debug)]
pub struct TableMut<'a> {
    element: &'a mut XmlElement,
    index: usize,
}

impl TableMut<'_> {
    #[must_use]
    pub fn row_count(&self) -> usize {
        row_elements(self.element).count()
    }

    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_>> {
        let count = self.row_count();
        let table = self.index;
        self.element
            .child_elements_mut()
            .filter(|element| element.is("tr"))
            .nth(row)
            .map(|element| RowMut {
                element,
                table,
                index: row,
            })
            .ok_or(DocxError::RowOutOfRange {
                table,
                row,
                count,
            })
    }

    /// Deep-copy the row at `template` and append the copy as the table's
    /// last row, returning a view of the new row. The clone shares no nodes
    /// with the template row.
    pub fn append_cloned_row(&mut self, template: usize) -> Result<RowMut<'_>> {
        let count = self.row_count();
        let cloned = row_elements(self.element)
            .nth(template)
            .cloned()
            .ok_or(DocxError::RowOutOfRange {
                table: self.index,
                row: template,
                count,
            })?;
        self.element.children.push(XmlNode::Element(cloned));
        self.row_mut(count)
    }
}

/// Mutable row view.
#[derive(Debug)]
pub struct RowMut<'a> {
    element: &'a mut XmlElement,
    table: usize,
    index: usize,
}

impl RowMut<'_> {
    #[must_use]
    pub fn cell_count(&self) -> usize {
        cell_elements(self.element).count()
    }

    pub fn cell_mut(&mut self, cell: usize) -> Result<CellMut<'_>> {
        let count = self.cell_count();
        let table = self.table;
        let row = self.index;
        self.element
            .child_elements_mut()
            .filter(|element| element.is("tc"))
            .nth(cell)
            .map(|element| CellMut { element })
            .ok_or(DocxError::CellOutOfRange {
                table,
                row,
                cell,
                count,
            })
    }
}

/// Mutable cell view, the destination side of text writes and splices.
#[derive(Debug)]
pub struct CellMut<'a> {
    element: &'a mut XmlElement,
}

impl CellMut<'_> {
    /// Replace the cell's block content with a single paragraph holding
    /// `text` in one run. Cell properties are preserved.
    pub fn set_text(&mut self, text: &str) {
        self.element
            .children
            .retain(|node| matches!(node, XmlNode::Element(element) if element.is("tcPr")));

        let mut t = XmlElement::new("w:t");
        t.attributes
            .push(("xml:space".to_string(), "preserve".to_string()));
        t.children.push(XmlNode::Text(text.to_string()));
        let mut run = XmlElement::new("w:r");
        run.children.push(XmlNode::Element(t));
        let mut paragraph = XmlElement::new("w:p");
        paragraph.children.push(XmlNode::Element(run));
        self.element.children.push(XmlNode::Element(paragraph));
    }

    /// Remove every child node and attribute, properties included. Pairs
    /// with [`Self::extend_from`] to rebuild the cell from reference content.
    pub fn clear(&mut self) {
        self.element.attributes.clear();
        self.element.children.clear();
    }

    /// Append deep copies of all of `source`'s child nodes.
    pub fn extend_from(&mut self, source: &CellRef<'_>) {
        self.element.children.extend(source.content().iter().cloned());
    }

    /// The cell's child nodes (properties and block content).
    #[must_use]
    pub fn content(&self) -> &[XmlNode] {
        &self.element.children
    }

    /// Human-visible text of the cell.
    #[must_use]
    pub fn text(&self) -> String {
        self.element.visible_text()
    }
}
