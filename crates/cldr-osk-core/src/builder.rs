// cldr-osk Layout Builder
// Turns parsed CLDR key groups into levels, rows and keys

use indexmap::IndexMap;

use crate::escape::decode_escapes;
use crate::keysym::SymbolResolver;
use crate::layout::{Align, Key, Layout, LayoutRow, Level};
use crate::position::parse_position;
use crate::source::{KeyGroup, SourceDocument};
use crate::{ConvertError, Mode, Row};

/// Width given to the space bar, in key units
pub const SPACE_WIDTH: f32 = 6.0;

/// Builds a [`Layout`] from a [`SourceDocument`]
pub struct LayoutBuilder<'a> {
    resolver: &'a dyn SymbolResolver,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(resolver: &'a dyn SymbolResolver) -> Self {
        Self { resolver }
    }

    /// Build the whole layout, one level per key group
    ///
    /// Entries with an invalid position code are skipped with a warning.
    /// Every other problem aborts the build.
    pub fn build(&self, doc: &SourceDocument) -> Result<Layout, ConvertError> {
        let levels = doc
            .groups
            .iter()
            .enumerate()
            .map(|(index, group)| self.build_level(index + 1, group))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Layout { levels })
    }

    fn build_level(&self, number: usize, group: &KeyGroup) -> Result<Level, ConvertError> {
        let name = format!("level{}", number);
        let mode = Mode::classify(group.modifiers.as_deref());

        let mut rows: IndexMap<Row, Vec<(u32, Key)>> = IndexMap::new();
        for entry in &group.entries {
            // Decode and resolve first; a bad value aborts even at a bad position
            let mut key = self.build_key(&entry.to, &entry.iso)?;
            let position = match parse_position(&entry.iso) {
                Ok(position) => position,
                Err(e) => {
                    log::warn!("{}", e);
                    continue;
                }
            };

            for value in &entry.long_press {
                key.subkeys.push(self.build_key(value, &entry.iso)?);
            }
            rows.entry(position.row)
                .or_default()
                .push((position.column, key));
        }

        // Top row first, then left to right within each row
        rows.sort_by(|a, _, b, _| b.cmp(a));
        let rows: Vec<LayoutRow> = rows
            .into_iter()
            .map(|(row, mut keys)| {
                keys.sort_by_key(|(column, _)| *column);
                LayoutRow {
                    row,
                    keys: keys.into_iter().map(|(_, key)| key).collect(),
                }
            })
            .collect();

        log::debug!(
            "Level '{}' ({}) built with {} rows, {} keys",
            name,
            mode,
            rows.len(),
            rows.iter().map(|row| row.keys.len()).sum::<usize>()
        );

        Ok(Level { name, mode, rows })
    }

    /// Build one key from a raw (escaped) value
    ///
    /// `iso` only identifies the source key in error messages.
    pub fn build_key(&self, value: &str, iso: &str) -> Result<Key, ConvertError> {
        let value = decode_escapes(value)?;

        let mut chars = value.chars();
        let first = chars
            .next()
            .ok_or_else(|| ConvertError::EmptyValue(iso.to_string()))?;
        let name = self
            .resolver
            .resolve(first)
            .ok_or_else(|| ConvertError::UnresolvedSymbol {
                codepoint: first as u32,
                iso: iso.to_string(),
            })?;

        let mut key = Key::new(name);
        if chars.next().is_some() {
            key.text = Some(value);
        }

        match key.name.as_str() {
            "space" => {
                key.align = Some(Align::Center);
                key.width = Some(SPACE_WIDTH);
                key.repeatable = true;
            }
            "BackSpace" => key.repeatable = true,
            _ => {}
        }

        Ok(key)
    }
}
