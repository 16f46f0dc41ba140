// cldr-osk Layout Model
// The on-screen keyboard layout tree produced by the builder

use crate::{Mode, Row};

/// Horizontal alignment of a key within its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Align {
    Center,
}

/// A single key, or a long-press subkey of another key
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Key {
    /// Symbolic name of the first character
    pub name: String,
    /// Full decoded value, only set when it spans several characters
    pub text: Option<String>,
    pub align: Option<Align>,
    pub width: Option<f32>,
    pub repeatable: bool,
    /// Long-press alternatives, in source order
    pub subkeys: Vec<Key>,
}

impl Key {
    /// Create a key with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One physical row of keys, sorted by column
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    /// The source row letter this row was built from
    pub row: Row,
    pub keys: Vec<Key>,
}

/// One modifier level of the layout
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// `level<N>`, N being the 1-based source group index
    pub name: String,
    pub mode: Mode,
    /// Rows from top (`E`) to bottom (`A`)
    pub rows: Vec<LayoutRow>,
}

impl Level {
    /// Iterate over every top-level key, row by row
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }
}

/// The complete on-screen keyboard layout
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub levels: Vec<Level>,
}

impl Layout {
    /// Find a level by name
    pub fn level(&self, name: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.name == name)
    }
}
