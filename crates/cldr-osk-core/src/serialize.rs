// cldr-osk Tree Serializer
// Writes a Layout as a pretty-printed, UTF-8 XML document

use std::borrow::Cow;
use std::io::Write;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

use crate::layout::{Key, Layout, Level};
use crate::ConvertError;

const INDENT_SIZE: usize = 2;

/// Write `layout` as an XML document to `out`
///
/// Output is fully determined by the layout: attribute order is fixed and
/// every nesting level is indented by two spaces.
pub fn write_layout<W: Write>(layout: &Layout, out: W) -> Result<(), ConvertError> {
    let mut writer = Writer::new_with_indent(out, b' ', INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if layout.levels.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("layout")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("layout")))?;
        for level in &layout.levels {
            write_level(&mut writer, level)?;
        }
        writer.write_event(Event::End(BytesEnd::new("layout")))?;
    }

    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Serialize `layout` into a string
pub fn layout_to_string(layout: &Layout) -> Result<String, ConvertError> {
    let mut buffer = Vec::new();
    write_layout(layout, &mut buffer)?;
    // quick-xml only writes the UTF-8 text it was given
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Push an attribute whose value survives attribute-value normalization
///
/// Raw TAB, LF and CR would be read back as spaces, so they are written as
/// character references on top of the usual markup escaping.
fn push_attribute(element: &mut BytesStart<'_>, key: &str, value: &str) {
    let mut escaped = String::with_capacity(value.len());
    for c in escape(value).chars() {
        match c {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            c => escaped.push(c),
        }
    }
    element.push_attribute(Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    });
}

fn write_level<W: Write>(writer: &mut Writer<W>, level: &Level) -> Result<(), ConvertError> {
    let mut element = BytesStart::new("level");
    push_attribute(&mut element, "name", level.name.as_str());
    push_attribute(&mut element, "mode", level.mode.to_string().as_str());

    if level.rows.is_empty() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }

    writer.write_event(Event::Start(element))?;
    for row in &level.rows {
        if row.keys.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("row")))?;
            continue;
        }
        writer.write_event(Event::Start(BytesStart::new("row")))?;
        for key in &row.keys {
            write_key(writer, key)?;
        }
        writer.write_event(Event::End(BytesEnd::new("row")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("level")))?;
    Ok(())
}

fn write_key<W: Write>(writer: &mut Writer<W>, key: &Key) -> Result<(), ConvertError> {
    let mut element = BytesStart::new("key");
    push_attribute(&mut element, "name", key.name.as_str());
    if let Some(text) = &key.text {
        push_attribute(&mut element, "text", text.as_str());
    }
    if let Some(align) = key.align {
        push_attribute(&mut element, "align", align.to_string().as_str());
    }
    if let Some(width) = key.width {
        push_attribute(&mut element, "width", format!("{:.1}", width).as_str());
    }
    if key.repeatable {
        push_attribute(&mut element, "repeatable", "yes");
    }

    if key.subkeys.is_empty() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }

    writer.write_event(Event::Start(element))?;
    for subkey in &key.subkeys {
        write_key(writer, subkey)?;
    }
    writer.write_event(Event::End(BytesEnd::new("key")))?;
    Ok(())
}
