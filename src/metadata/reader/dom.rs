//! Minimal owned element tree.
//!
//! The `quick-xml` event stream is folded into [`Element`] nodes holding a name, the
//! unescaped attributes and the child elements. Text, comments, processing instructions and
//! CDATA carry nothing the metadata reader needs and are dropped while building the tree.
//! Every descent step ([`Element::first_child`], [`Element::attribute`]) answers with an
//! [`Option`], so absence is always explicit at the call site.
//!
//! Only the top [`RETAINED_DEPTH`] levels are kept (`Edmx` → `DataServices` → `Schema` →
//! `EntityType`/`EntityContainer` → `Property`/`EntitySet`). Deeper elements are still
//! checked for balance by the parser but never stored, so the tree stays shallow no matter
//! how deeply an annotation nests.

use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::{metadata::reader::tag::CsdlTag, Error, Result};

/// Number of element levels, counted from the root, kept in a [`Document`].
pub const RETAINED_DEPTH: usize = 5;

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

/// An element with its attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Document {
    /// Parses `xml` into an element tree.
    ///
    /// # Errors
    ///
    /// * [`Error::Xml`] / [`Error::XmlAttribute`] - the parser rejected the text
    /// * [`Error::Encoding`] - a name is not valid UTF-8
    /// * [`Error::Malformed`] - no root element, more than one root element, text outside the
    ///   root element, or elements left open at the end of the input
    pub fn parse(xml: &str) -> Result<Self> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        // Open elements below RETAINED_DEPTH, counted but not stored
        let mut discarded: usize = 0;

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader.read_event().map_err(|source| Error::Xml {
                position: reader.error_position() as u64,
                source,
            })?;

            match event {
                Event::Start(_) if discarded > 0 || open.len() >= RETAINED_DEPTH => {
                    discarded += 1;
                }
                Event::Empty(_) if discarded > 0 || open.len() >= RETAINED_DEPTH => {}
                Event::End(_) if discarded > 0 => discarded -= 1,
                Event::Start(start) => open.push(Element::from_start(&start, position)?),
                Event::Empty(start) => {
                    let element = Element::from_start(&start, position)?;
                    attach(&mut open, &mut root, element, position)?;
                }
                Event::End(end) => {
                    let Some(element) = open.pop() else {
                        return Err(malformed_error!(
                            "closing tag </{}> at byte {} has no opening tag",
                            String::from_utf8_lossy(end.name().as_ref()),
                            position
                        ));
                    };
                    attach(&mut open, &mut root, element, position)?;
                }
                Event::Text(_) | Event::CData(_) if open.is_empty() => {
                    return Err(malformed_error!(
                        "character data outside of the root element at byte {}",
                        position
                    ));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(element) = open.last() {
            return Err(malformed_error!(
                "element <{}> is not closed at the end of the document",
                element.name
            ));
        }

        root.map(|root| Document { root })
            .ok_or_else(|| malformed_error!("document has no root element"))
    }

    /// The document element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: u64,
) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(malformed_error!(
                "second root element <{}> at byte {}",
                element.name,
                position
            ))
        }
    }
    Ok(())
}

impl Element {
    fn from_start(start: &BytesStart, position: u64) -> Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute =
                attribute.map_err(|source| Error::XmlAttribute { position, source })?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
            let value = attribute
                .unescape_value()
                .map_err(|source| Error::Xml { position, source })?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Qualified name as written, e.g. `edmx:DataServices`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Classification of this element for the metadata walk.
    #[must_use]
    pub fn tag(&self) -> CsdlTag {
        CsdlTag::from_local_name(self.local_name())
    }

    /// Unescaped value of the attribute named exactly `key`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn children(&self) -> std::slice::Iter<'_, Element> {
        self.children.iter()
    }

    /// The first child element.
    #[must_use]
    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }
}
