//! XML reading and writing for [`PomDocument`] with `quick-xml`.

use super::{Element, Node, PROJECT_ELEMENT, PomDocument, XmlDeclaration};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use std::io::{self, Write};
use thiserror::Error;

/// Indentation width of rewritten descriptors.
const INDENT: usize = 2;

/// Why a descriptor could not be parsed.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    #[error("element <{0}> is not closed")]
    Unclosed(String),

    #[error("document has no root element")]
    MissingRoot,

    #[error("document has more than one root element (found <{0}>)")]
    MultipleRoots(String),

    #[error("expected <project> as root element, found <{0}>")]
    UnexpectedRoot(String),
}

pub(super) fn parse_document(source: &str) -> Result<PomDocument, XmlError> {
    let mut reader = Reader::from_str(source);

    let mut declaration = None;
    let mut prolog = Vec::new();
    let mut epilog = Vec::new();
    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let node = match reader.read_event()? {
            Event::Decl(decl) => {
                declaration = Some(read_declaration(&decl)?);
                continue;
            }
            Event::Start(start) => {
                stack.push(read_element(&start)?);
                continue;
            }
            Event::End(end) => match stack.pop() {
                Some(element) => Node::Element(element),
                None => {
                    return Err(XmlError::UnexpectedEnd(
                        String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                    ));
                }
            },
            Event::Empty(start) => Node::Element(read_element(&start)?),
            Event::Text(text) => {
                let text = text.unescape()?;
                // indentation only; mixed content keeps its spaces
                if text.trim().is_empty() {
                    continue;
                }
                Node::Text(text.into_owned())
            }
            Event::CData(data) => Node::CData(lossy(&data)),
            Event::Comment(comment) => Node::Comment(lossy(&comment)),
            Event::PI(instruction) => Node::ProcessingInstruction(lossy(&instruction)),
            Event::DocType(doctype) => Node::DocType(lossy(&doctype)),
            Event::Eof => break,
        };

        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
            continue;
        }

        match node {
            Node::Element(element) => {
                if root.is_some() {
                    return Err(XmlError::MultipleRoots(element.name));
                }
                root = Some(element);
            }
            // stray character data outside the root carries no meaning
            Node::Text(_) | Node::CData(_) => {}
            other if root.is_some() => epilog.push(other),
            other => prolog.push(other),
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed(open.name));
    }

    let root = root.ok_or(XmlError::MissingRoot)?;
    if root.name != PROJECT_ELEMENT {
        return Err(XmlError::UnexpectedRoot(root.name));
    }

    Ok(PomDocument {
        declaration: declaration.unwrap_or_default(),
        prolog,
        root,
        epilog,
    })
}

fn read_element(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<XmlDeclaration, XmlError> {
    let version = decl.version().map_err(quick_xml::Error::from)?;
    let encoding = decl.encoding().transpose().map_err(quick_xml::Error::from)?;
    let standalone = decl.standalone().transpose().map_err(quick_xml::Error::from)?;

    Ok(XmlDeclaration {
        version: lossy(&version),
        encoding: encoding.map(|value| lossy(&value)),
        standalone: standalone.map(|value| lossy(&value)),
    })
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Render into memory first so that `out` only ever sees one complete write.
pub(super) fn write_document<W: Write>(document: &PomDocument, mut out: W) -> io::Result<()> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    let declaration = &document.declaration;
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new(
            &declaration.version,
            declaration.encoding.as_deref(),
            declaration.standalone.as_deref(),
        )),
    )?;
    for node in &document.prolog {
        write_node(&mut writer, node)?;
    }
    write_element(&mut writer, &document.root)?;
    for node in &document.epilog {
        write_node(&mut writer, node)?;
    }

    let mut buffer = writer.into_inner();
    buffer.push(b'\n');
    out.write_all(&buffer)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> io::Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element),
        Node::Text(text) => emit(writer, Event::Text(BytesText::new(text))),
        Node::CData(data) => emit(writer, Event::CData(BytesCData::new(data.as_str()))),
        Node::Comment(comment) => emit(writer, Event::Comment(BytesText::from_escaped(comment.as_str()))),
        Node::ProcessingInstruction(instruction) => {
            emit(writer, Event::PI(BytesPI::new(instruction.as_str())))
        }
        Node::DocType(doctype) => emit(writer, Event::DocType(BytesText::from_escaped(doctype.as_str()))),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> io::Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> io::Result<()> {
    writer.write_event(event).map_err(io::Error::other)
}
