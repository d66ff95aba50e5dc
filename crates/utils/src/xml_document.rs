use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

/// Indented UTF-8 XML document built element by element.
///
/// Text and attribute values are escaped by the writer.
pub struct XmlDocument {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlDocument {
    /// Starts a document with an `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    ///
    /// # Errors
    /// Returns error if the declaration cannot be written.
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(Self { writer })
    }

    pub fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name>text</name>`
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes nothing for `None`.
    pub fn optional_element(&mut self, name: &str, text: Option<&str>) -> Result<()> {
        match text {
            Some(text) => self.text_element(name, text),
            None => Ok(()),
        }
    }

    /// # Errors
    /// Returns error if the written bytes are not valid UTF-8.
    pub fn finish(self) -> Result<String> {
        let mut xml = String::from_utf8(self.writer.into_inner().into_inner())?;
        xml.push('\n');
        Ok(xml)
    }
}

impl std::fmt::Debug for XmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlDocument").finish_non_exhaustive()
    }
}
