use altmem_core::{TmxDocument, XmlElement, XmlNode, TMX_VERSION};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

#[derive(Debug, thiserror::Error)]
#[error("failed to serialize TMX: {0}")]
pub struct SerializeError(String);

/// Serialize a TMX document as UTF-8 bytes with an XML declaration, unindented.
pub fn serialize_tmx(document: &TmxDocument) -> Result<Vec<u8>, SerializeError> {
    let mut writer = Writer::new(Vec::new());
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut root = BytesStart::new("tmx");
    root.push_attribute(("version", TMX_VERSION));
    emit(&mut writer, Event::Start(root))?;

    let mut header = BytesStart::new("header");
    for (name, value) in document.header().attributes() {
        header.push_attribute((name, value));
    }
    emit(&mut writer, Event::Empty(header))?;

    if document.units().is_empty() {
        emit(&mut writer, Event::Empty(BytesStart::new("body")))?;
    } else {
        emit(&mut writer, Event::Start(BytesStart::new("body")))?;
        for unit in document.units() {
            write_element(&mut writer, unit.element())?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("body")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("tmx")))?;
    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), SerializeError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }
    emit(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
            XmlNode::Element(inner) => write_element(writer, inner)?,
        }
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SerializeError> {
    writer
        .write_event(event)
        .map_err(|err| SerializeError(err.to_string()))
}
