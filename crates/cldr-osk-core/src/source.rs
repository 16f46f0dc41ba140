// cldr-osk Source Reader
// Reads the subset of the CLDR keyboard schema the converter consumes

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::ConvertError;

/// One `<map>` element: a physical key and what it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    /// ISO position code, e.g. "C01"
    pub iso: String,
    /// Output value, possibly containing `\u{...}` escapes
    pub to: String,
    /// Long-press alternatives, in source order
    pub long_press: Vec<String>,
}

/// One `<keyMap>` element: all keys for a modifier combination
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyGroup {
    /// Raw `modifiers` attribute, if present
    pub modifiers: Option<String>,
    pub entries: Vec<KeyEntry>,
}

/// A parsed CLDR keyboard document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceDocument {
    /// Key groups in document order
    pub groups: Vec<KeyGroup>,
}

impl SourceDocument {
    /// Load and parse a CLDR keyboard file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let content = fs::read_to_string(path.as_ref())?;
        log::info!("Loaded {}", path.as_ref().display());
        Self::parse(&content)
    }

    /// Parse a CLDR keyboard document from a string
    ///
    /// Only `keyMap` and `map` elements are read; everything else is ignored.
    pub fn parse(xml: &str) -> Result<Self, ConvertError> {
        // CLDR keyboard files carry a DOCTYPE referencing the keyboard DTD
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;

        let groups = doc
            .descendants()
            .filter(|node| node.has_tag_name("keyMap"))
            .map(|key_map| parse_key_group(&doc, key_map))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Parsed {} keyMap groups", groups.len());
        Ok(Self { groups })
    }
}

fn parse_key_group(doc: &Document, key_map: Node<'_, '_>) -> Result<KeyGroup, ConvertError> {
    let entries = key_map
        .descendants()
        .filter(|node| node.has_tag_name("map"))
        .map(|map| parse_key_entry(doc, map))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(KeyGroup {
        modifiers: key_map.attribute("modifiers").map(str::to_string),
        entries,
    })
}

fn parse_key_entry(doc: &Document, map: Node<'_, '_>) -> Result<KeyEntry, ConvertError> {
    let required = |attribute: &'static str| {
        map.attribute(attribute)
            .ok_or_else(|| ConvertError::MissingAttribute {
                element: "map",
                attribute,
                line: doc.text_pos_at(map.range().start).row,
            })
    };

    let iso = required("iso")?.to_string();
    let to = required("to")?.to_string();
    let long_press: Vec<String> = map
        .attribute("longPress")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    Ok(KeyEntry { iso, to, long_press })
}
