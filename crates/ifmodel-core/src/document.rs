//! Minimal owned XML tree used to read configuration documents.
//!
//! The parser only needs a handful of lookups: an attribute by name, the
//! first child element with a given tag, element-only iteration and the
//! text content of a node. `quick-xml` drives the tokenizing; this module
//! assembles the events into an [`Element`] tree that can be walked
//! repeatedly without re-reading the source.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("unexpected </{found}> at byte {position}")]
    UnbalancedTag { found: String, position: usize },

    #[error("element <{tag}> is never closed")]
    Unclosed { tag: String },

    #[error("document has no root element")]
    NoRoot,

    #[error("second root element <{tag}> at byte {position}")]
    MultipleRoots { tag: String, position: usize },
}

// ── Nodes ───────────────────────────────────────────────────────────

/// Kind of a child node, mirroring the DOM node types the parser cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    CData,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::CData(_) => NodeKind::CData,
            Self::Comment(_) => NodeKind::Comment,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

}

/// An XML element with its attributes (document order) and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All child nodes, including text and comments.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First direct child element with the given tag.
    pub fn first_element(&self, tag: &str) -> Option<&Element> {
        self.elements().find(|e| e.tag == tag)
    }

    /// Descend through first-matching children along a `/`-separated path.
    ///
    /// Empty segments are ignored, so `"a//b/"` is the same as `"a/b"` and
    /// an empty path returns `self`.
    pub fn find_path(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.first_element(segment))
    }

    /// Concatenated text of all descendant text and CDATA nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) | Node::CData(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
                Node::Comment(_) => {}
            }
        }
    }

    // ── Builders (used by tests and programmatic construction) ──────

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }
}

// ── Document ────────────────────────────────────────────────────────

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse an XML document from a string.
    ///
    /// Whitespace-only text between elements is dropped; other text is kept
    /// verbatim apart from entity unescaping. The XML declaration, processing
    /// instructions and DOCTYPE are skipped. A second top-level element is
    /// an error.
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(source);

        // Open elements; the last entry is the innermost.
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| DocumentError::Syntax {
                position: reader.buffer_position(),
                message: e.to_string(),
            })?;

            match event {
                Event::Start(start) => {
                    stack.push(element_from_start(&start, reader.buffer_position())?);
                }
                Event::Empty(start) => {
                    let element = element_from_start(&start, reader.buffer_position())?;
                    attach(&mut stack, &mut root, element, reader.buffer_position())?;
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    let element = match stack.pop() {
                        Some(e) if e.tag == name => e,
                        _ => {
                            return Err(DocumentError::UnbalancedTag {
                                found: name,
                                position: reader.buffer_position(),
                            });
                        }
                    };
                    attach(&mut stack, &mut root, element, reader.buffer_position())?;
                }
                Event::Text(text) => {
                    let value = text.unescape().map_err(|e| DocumentError::Syntax {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    })?;
                    if !value.trim().is_empty() {
                        push_child(&mut stack, Node::Text(value.into_owned()));
                    }
                }
                Event::CData(data) => {
                    push_child(&mut stack, Node::CData(lossy(&data)));
                }
                Event::Comment(comment) => {
                    push_child(&mut stack, Node::Comment(lossy(&comment)));
                }
                Event::Eof => break,
                // Declaration, processing instructions, DOCTYPE.
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(DocumentError::Unclosed { tag: open.tag });
        }

        root.map(|root| Self { root }).ok_or(DocumentError::NoRoot)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}

// ── Private helpers ─────────────────────────────────────────────────

fn element_from_start(start: &BytesStart<'_>, position: usize) -> Result<Element, DocumentError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DocumentError::Syntax {
            position,
            message: e.to_string(),
        })?;
        let value = attr.unescape_value().map_err(|e| DocumentError::Syntax {
            position,
            message: e.to_string(),
        })?;
        element.attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(element)
}

/// Attach a completed element to its parent, or make it the root.
fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: usize,
) -> Result<(), DocumentError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_some() => {
            return Err(DocumentError::MultipleRoots {
                tag: element.tag,
                position,
            });
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn push_child(stack: &mut [Element], node: Node) {
    // Character data outside the root element carries no meaning.
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
