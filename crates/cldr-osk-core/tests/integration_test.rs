// cldr-osk Integration Tests
//
// These tests run the complete pipeline:
// CLDR XML -> SourceDocument -> LayoutBuilder -> serialized layout
//
// Run with: cargo test -p cldr-osk-core --test integration_test

use cldr_osk_core::{
    convert, parse_position, LayoutBuilder, Mode, PositionError, Row, SourceDocument, X11Keysyms,
};

fn keyboard(body: &str) -> String {
    format!("<keyboard locale=\"xx-t-k0-test\">{}</keyboard>", body)
}

#[test]
fn test_two_key_scenario() {
    let xml = keyboard(
        r#"<keyMap>
            <map iso="C01" to="\u{0061}"/>
            <map iso="C02" to="\u{0062}"/>
        </keyMap>"#,
    );

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<layout>\n",
        "  <level name=\"level1\" mode=\"default\">\n",
        "    <row>\n",
        "      <key name=\"a\"/>\n",
        "      <key name=\"b\"/>\n",
        "    </row>\n",
        "  </level>\n",
        "</layout>\n",
    );
    assert_eq!(convert(&xml, &X11Keysyms).unwrap(), expected);
}

#[test]
fn test_invalid_row_dropped_rest_converted() {
    let xml = keyboard(
        r#"<keyMap>
            <map iso="F01" to="f"/>
            <map iso="B01" to="z"/>
        </keyMap>
        <keyMap modifiers="shift">
            <map iso="B01" to="Z"/>
        </keyMap>"#,
    );

    let source = SourceDocument::parse(&xml).unwrap();
    let layout = LayoutBuilder::new(&X11Keysyms).build(&source).unwrap();

    assert_eq!(layout.levels.len(), 2);
    for level in &layout.levels {
        assert!(level.keys().all(|key| key.name != "f"));
        assert_eq!(level.keys().count(), 1);
    }
    assert_eq!(layout.levels[1].keys().next().unwrap().name, "Z");
}

#[test]
fn test_position_codec_properties() {
    for letter in ['A', 'B', 'C', 'D', 'E'] {
        for column in [0u32, 1, 9, 10, 12, 99, 1000] {
            let code = format!("{}{:02}", letter, column);
            let position = parse_position(&code).unwrap();
            assert_eq!(position.row.to_string(), letter.to_string());
            assert_eq!(position.column, column);
        }
    }

    for code in ["F01", "a01", "A", "1A", "AA1", "A1 ", ""] {
        assert_eq!(
            parse_position(code),
            Err(PositionError::InvalidPosition(code.to_string()))
        );
    }
}

#[test]
fn test_mode_classification_from_document() {
    let xml = keyboard(
        r#"<keyMap><map iso="C01" to="a"/></keyMap>
        <keyMap modifiers="shift"><map iso="C01" to="A"/></keyMap>
        <keyMap modifiers="lock shift"><map iso="C01" to="a"/></keyMap>
        <keyMap modifiers="altGr"><map iso="C01" to="æ"/></keyMap>
        <keyMap modifiers=""><map iso="C01" to="a"/></keyMap>"#,
    );

    let source = SourceDocument::parse(&xml).unwrap();
    let layout = LayoutBuilder::new(&X11Keysyms).build(&source).unwrap();

    let modes: Vec<Mode> = layout.levels.iter().map(|level| level.mode).collect();
    assert_eq!(
        modes,
        vec![
            Mode::Default,
            Mode::Latched,
            Mode::Latched,
            Mode::Locked,
            Mode::Default
        ]
    );
}

#[test]
fn test_level_names_ignore_entry_counts() {
    let xml = keyboard(
        r#"<keyMap/>
        <keyMap modifiers="shift"><map iso="Q01" to="q"/></keyMap>
        <keyMap modifiers="altGr"><map iso="D01" to="@"/></keyMap>"#,
    );

    let source = SourceDocument::parse(&xml).unwrap();
    let layout = LayoutBuilder::new(&X11Keysyms).build(&source).unwrap();

    let names: Vec<&str> = layout.levels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["level1", "level2", "level3"]);
    assert!(layout.levels[0].rows.is_empty());
    assert!(layout.levels[1].rows.is_empty());
    assert_eq!(layout.level("level3").unwrap().rows[0].row, Row::D);
}

#[test]
fn test_text_attribute_iff_multiple_codepoints() {
    let xml = keyboard(
        r#"<keyMap>
            <map iso="C01" to="a"/>
            <map iso="C02" to="\u{0061}\u{0301}"/>
            <map iso="C03" to="'s"/>
            <map iso="C04" to="\u{1F600}"/>
        </keyMap>"#,
    );

    let source = SourceDocument::parse(&xml).unwrap();
    let layout = LayoutBuilder::new(&X11Keysyms).build(&source).unwrap();
    let keys: Vec<_> = layout.levels[0].keys().collect();

    assert_eq!(keys[0].text, None);
    assert_eq!(keys[1].text.as_deref(), Some("a\u{301}"));
    assert_eq!(keys[2].name, "apostrophe");
    assert_eq!(keys[2].text.as_deref(), Some("'s"));
    assert_eq!(keys[3].name, "U1F600");
    assert_eq!(keys[3].text, None);
}

#[test]
fn test_special_keys_serialized() {
    let xml = keyboard(
        r#"<keyMap>
            <map iso="A03" to=" "/>
            <map iso="E13" to="\u{0008}"/>
        </keyMap>"#,
    );

    let output = convert(&xml, &X11Keysyms).unwrap();
    assert!(output.contains(
        "<key name=\"BackSpace\" repeatable=\"yes\"/>"
    ));
    assert!(output.contains(
        "<key name=\"space\" align=\"center\" width=\"6.0\" repeatable=\"yes\"/>"
    ));
    // E row comes before A row
    let backspace = output.find("BackSpace").unwrap();
    let space = output.find("\"space\"").unwrap();
    assert!(backspace < space);
}

#[test]
fn test_control_characters_in_text_survive_reparse() {
    let xml = keyboard(r#"<keyMap><map iso="C01" to="a\u{9}b\u{A}c\u{D}"/></keyMap>"#);
    let output = convert(&xml, &X11Keysyms).unwrap();

    let doc = roxmltree::Document::parse(&output).unwrap();
    let key = doc
        .descendants()
        .find(|node| node.has_tag_name("key"))
        .unwrap();
    assert_eq!(key.attribute("name"), Some("a"));
    assert_eq!(key.attribute("text"), Some("a\tb\nc\r"));
}

#[test]
fn test_unresolved_symbol_aborts() {
    let xml = keyboard(r#"<keyMap><map iso="C01" to="\u{0001}"/></keyMap>"#);
    let err = convert(&xml, &X11Keysyms).unwrap_err();
    assert_eq!(err.to_string(), "No symbolic name for U+0001 in key C01");
}

#[test]
fn test_missing_to_attribute_aborts() {
    let xml = keyboard(r#"<keyMap><map iso="C01"/></keyMap>"#);
    assert!(convert(&xml, &X11Keysyms).is_err());
}
