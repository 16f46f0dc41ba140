// cldr-osk Escape Decoder
// Expands \u{HEX} escapes found in CLDR attribute values

use std::sync::LazyLock;

use regex::Regex;

use crate::ConvertError;

static ESCAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u\{([0-9a-fA-F]+)\}").expect("escape pattern is valid"));

/// Replace every `\u{HEX}` escape in `value` with the character it names
///
/// Text that is not a well-formed escape is copied through unchanged. An
/// escape whose digits do not name a Unicode scalar value is an error.
///
/// # Examples
/// ```
/// use cldr_osk_core::escape::decode_escapes;
/// assert_eq!(decode_escapes(r"ab\u{0063}").unwrap(), "abc");
/// ```
pub fn decode_escapes(value: &str) -> Result<String, ConvertError> {
    let mut decoded = String::with_capacity(value.len());
    let mut last = 0;

    for escape in ESCAPE_PATTERN.find_iter(value) {
        let text = escape.as_str();
        // Strip the leading `\u{` and trailing `}`
        let digits = &text[3..text.len() - 1];
        let c = u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| ConvertError::MalformedEscape(text.to_string()))?;

        decoded.push_str(&value[last..escape.start()]);
        decoded.push(c);
        last = escape.end();
    }

    decoded.push_str(&value[last..]);
    Ok(decoded)
}
