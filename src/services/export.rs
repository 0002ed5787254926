//! XML export of list results.
//!
//! The export is a pure function of the item list: the same items in the same
//! order always produce byte-identical text. Either the whole document is
//! produced or an error is returned.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

const INDENT_WIDTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("invalid XML element name: {0:?}")]
    InvalidName(String),

    #[error("text cannot be represented in XML 1.0: {0:?}")]
    InvalidText(String),

    #[error("failed to write XML: {0}")]
    Write(String),

    #[error("XML output is not valid UTF-8: {0}")]
    Encoding(String),
}

/// A value that renders as a sequence of child elements.
pub trait XmlFields {
    /// Writes one element per field, in declaration order.
    fn write_fields(&self, out: &mut XmlOutput) -> Result<(), ExportError>;
}

/// A list item with its own element name.
pub trait XmlRecord: XmlFields {
    const ELEMENT: &'static str;
}

/// Indented XML sink handed to [`XmlFields::write_fields`].
pub struct XmlOutput {
    writer: Writer<Vec<u8>>,
}

impl XmlOutput {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), ExportError> {
        self.writer
            .write_event(event)
            .map_err(|e| ExportError::Write(e.to_string()))
    }

    /// Writes `<name>value</name>`.
    pub fn field(&mut self, name: &str, value: &str) -> Result<(), ExportError> {
        check_name(name)?;
        check_text(value)?;
        self.write(Event::Start(BytesStart::new(name)))?;
        self.write(Event::Text(BytesText::new(value)))?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Writes `<name>` with whatever `fields` emits as its children.
    pub fn group<F>(&mut self, name: &str, fields: F) -> Result<(), ExportError>
    where
        F: FnOnce(&mut Self) -> Result<(), ExportError>,
    {
        check_name(name)?;
        self.write(Event::Start(BytesStart::new(name)))?;
        fields(self)?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn finish(self) -> Result<String, ExportError> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| ExportError::Encoding(e.to_string()))
    }
}

/// Accepts plain element names: a letter or `_` followed by letters, digits,
/// `_`, `-` or `.`.
fn check_name(name: &str) -> Result<(), ExportError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ExportError::InvalidName(name.to_string()))
    }
}

/// The `Char` production of XML 1.0. Escaping cannot make anything else
/// representable.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn check_text(value: &str) -> Result<(), ExportError> {
    if value.chars().all(is_xml_char) {
        Ok(())
    } else {
        Err(ExportError::InvalidText(value.to_string()))
    }
}

/// Serializes `items` as `<root><item>..</item>..</root>` with an XML
/// declaration and four-space indentation.
pub fn to_xml<T: XmlRecord>(root: &str, items: &[T]) -> Result<String, ExportError> {
    let mut out = XmlOutput::new();
    out.write(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    out.group(root, |out| {
        for item in items {
            out.group(T::ELEMENT, |out| item.write_fields(out))?;
        }
        Ok(())
    })?;
    out.finish()
}
