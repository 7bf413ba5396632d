//! Owned XML element tree with quick-xml parsing and serialization.
//!
//! WordprocessingML manipulation here is structural, not textual: rows are
//! cloned and cell content is spliced as whole subtrees, so the tree must be
//! an owned recursive structure whose `Clone` is a deep copy.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{DocxError, Result};

/// One node of the tree: a child element or character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its qualified name, attributes, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified name exactly as written in the source, e.g. `w:tbl`.
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Name without its namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// True when the element's local name matches.
    #[must_use]
    pub fn is(&self, local: &str) -> bool {
        self.local_name() == local
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut XmlElement> {
        self.children.iter_mut().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenated character data of all descendant `w:t` elements, one line
    /// per paragraph. Intended for assertions and diagnostics.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &XmlElement, out: &mut String) {
    if element.is("t") {
        for node in &element.children {
            if let XmlNode::Text(text) = node {
                out.push_str(text);
            }
        }
        return;
    }
    if element.is("p") && !out.is_empty() {
        out.push('\n');
    }
    for child in element.child_elements() {
        collect_text(child, out);
    }
}

/// Parse a complete XML document into its root element.
///
/// Whitespace-only text between elements is dropped; WordprocessingML keeps
/// meaningful text inside `w:t` only, where it survives intact.
pub fn parse_document(xml: &str, context: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DocxError::xml(context, e))?;
        match event {
            Event::Start(start) => {
                stack.push(element_from_start(&start, context)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start, context)?;
                place(XmlNode::Element(element), &mut stack, &mut root);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| DocxError::xml(context, "unbalanced end tag"))?;
                place(XmlNode::Element(element), &mut stack, &mut root);
            }
            Event::Text(text) => {
                let text = text.decode().map_err(|e| DocxError::xml(context, e))?;
                let text =
                    quick_xml::escape::unescape(&text).map_err(|e| DocxError::xml(context, e))?;
                if !text.trim().is_empty() || in_text_element(&stack) {
                    place(XmlNode::Text(text.into_owned()), &mut stack, &mut root);
                }
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                place(XmlNode::Text(text), &mut stack, &mut root);
            }
            Event::GeneralRef(reference) => {
                let text = match reference
                    .resolve_char_ref()
                    .map_err(|e| DocxError::xml(context, e))?
                {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name = reference.decode().map_err(|e| DocxError::xml(context, e))?;
                        quick_xml::escape::resolve_predefined_entity(&name)
                            .ok_or_else(|| {
                                DocxError::xml(context, format!("unknown entity `&{name};`"))
                            })?
                            .to_string()
                    }
                };
                place(XmlNode::Text(text), &mut stack, &mut root);
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(DocxError::xml(context, "unclosed element at end of input"));
    }
    root.ok_or_else(|| DocxError::xml(context, "document has no root element"))
}

fn element_from_start(start: &BytesStart<'_>, context: &str) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| DocxError::xml(context, e))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| DocxError::xml(context, e))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn place(node: XmlNode, stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>) {
    if let Some(parent) = stack.last_mut() {
        // Adjacent character data (split by the reader at entity references)
        // collapses into one node.
        if let (XmlNode::Text(text), Some(XmlNode::Text(last))) =
            (&node, parent.children.last_mut())
        {
            last.push_str(text);
            return;
        }
        parent.children.push(node);
    } else if let XmlNode::Element(element) = node {
        // Content outside the root element is ignored
        if root.is_none() {
            *root = Some(element);
        }
    }
}

fn in_text_element(stack: &[XmlElement]) -> bool {
    stack.last().is_some_and(|element| element.is("t"))
}

/// Serialize a tree back to a standalone XML document with declaration.
pub fn write_document(root: &XmlElement) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(|e| DocxError::xml(&root.name, e))?;
    write_element(&mut writer, root)?;
    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| DocxError::xml(&element.name, e))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| DocxError::xml(&element.name, e))?;
    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| DocxError::xml(&element.name, e))?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| DocxError::xml(&element.name, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes() {
        let root = parse_document(
            r#"<?xml version="1.0"?><w:tbl w:id="3"><w:tr><w:tc/></w:tr></w:tbl>"#,
            "test",
        )
        .expect("parse");
        assert_eq!(root.name, "w:tbl");
        assert_eq!(root.local_name(), "tbl");
        assert_eq!(root.attributes, vec![("w:id".to_string(), "3".to_string())]);
        let row = root.child_elements().next().expect("row");
        assert!(row.is("tr"));
        assert_eq!(row.child_elements().count(), 1);
    }

    #[test]
    fn preserves_text_inside_t_elements() {
        let root = parse_document(
            "<w:p>\n  <w:r><w:t xml:space=\"preserve\"> 50 mL </w:t></w:r>\n</w:p>",
            "test",
        )
        .expect("parse");
        assert_eq!(root.visible_text(), " 50 mL ");
    }

    #[test]
    fn round_trips_through_serializer() {
        let source = r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Eye &amp; skin</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#;
        let root = parse_document(source, "test").expect("parse");
        let bytes = write_document(&root).expect("write");
        let text = String::from_utf8(bytes).expect("utf8");
        let reparsed = parse_document(&text, "test").expect("reparse");
        assert_eq!(reparsed, root);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let root = parse_document("<w:tr><w:tc><w:t>x</w:t></w:tc></w:tr>", "test").expect("parse");
        let mut cloned = root.clone();
        if let Some(XmlNode::Element(cell)) = cloned.children.first_mut() {
            cell.children.clear();
        }
        assert_eq!(root.visible_text(), "x");
        assert_eq!(cloned.visible_text(), "");
    }

    #[test]
    fn unbalanced_input_is_rejected() {
        assert!(parse_document("<w:tbl><w:tr></w:tbl>", "test").is_err());
        assert!(parse_document("", "test").is_err());
    }
}
