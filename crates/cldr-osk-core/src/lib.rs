// cldr-osk Core Library
// Converts CLDR keyboard descriptions into on-screen keyboard layouts

pub mod builder;
pub mod error;
pub mod escape;
pub mod keysym;
pub mod layout;
pub mod mode;
pub mod position;
pub mod serialize;
pub mod source;

pub use builder::{LayoutBuilder, SPACE_WIDTH};
pub use error::ConvertError;
pub use escape::decode_escapes;
pub use keysym::{Keysym, SymbolResolver, X11Keysyms};
pub use layout::{Align, Key, Layout, LayoutRow, Level};
pub use mode::Mode;
pub use position::{parse_position, Position, PositionError, Row};
pub use serialize::{layout_to_string, write_layout};
pub use source::{KeyEntry, KeyGroup, SourceDocument};

/// Convert a CLDR keyboard document into an on-screen keyboard layout document
///
/// # Examples
/// ```
/// use cldr_osk_core::{convert, X11Keysyms};
/// let xml = r#"<keyboard><keyMap><map iso="C01" to="a"/></keyMap></keyboard>"#;
/// let layout = convert(xml, &X11Keysyms).unwrap();
/// assert!(layout.contains(r#"<key name="a"/>"#));
/// ```
pub fn convert(xml: &str, resolver: &dyn SymbolResolver) -> Result<String, ConvertError> {
    let source = SourceDocument::parse(xml)?;
    let layout = LayoutBuilder::new(resolver).build(&source)?;
    layout_to_string(&layout)
}
