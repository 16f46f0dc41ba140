// cldr-osk Keysym Namespace
// Resolves Unicode codepoints to X11 keysyms and their canonical names

use std::borrow::Cow;
use std::fmt;

include!(concat!(env!("OUT_DIR"), "/keysym.rs"));

/// Keysyms above this offset encode a Unicode scalar value directly
const UNICODE_OFFSET: u32 = 0x0100_0000;

/// Names for keysyms 0x20..=0x7e (identical to ASCII)
const ASCII_NAMES: [&str; 95] = [
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand",
    "apostrophe", "parenleft", "parenright", "asterisk", "plus", "comma", "minus", "period",
    "slash", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "colon", "semicolon", "less",
    "equal", "greater", "question", "at", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J",
    "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "bracketleft", "backslash", "bracketright", "asciicircum", "underscore", "grave", "a",
    "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z", "braceleft", "bar", "braceright", "asciitilde",
];

/// Names for keysyms 0xa0..=0xff (identical to Latin-1)
const LATIN1_NAMES: [&str; 96] = [
    "nobreakspace", "exclamdown", "cent", "sterling", "currency", "yen", "brokenbar",
    "section", "diaeresis", "copyright", "ordfeminine", "guillemotleft", "notsign", "hyphen",
    "registered", "macron", "degree", "plusminus", "twosuperior", "threesuperior", "acute",
    "mu", "paragraph", "periodcentered", "cedilla", "onesuperior", "masculine",
    "guillemotright", "onequarter", "onehalf", "threequarters", "questiondown", "Agrave",
    "Aacute", "Acircumflex", "Atilde", "Adiaeresis", "Aring", "AE", "Ccedilla", "Egrave",
    "Eacute", "Ecircumflex", "Ediaeresis", "Igrave", "Iacute", "Icircumflex", "Idiaeresis",
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocircumflex", "Otilde", "Odiaeresis", "multiply",
    "Oslash", "Ugrave", "Uacute", "Ucircumflex", "Udiaeresis", "Yacute", "THORN", "ssharp",
    "agrave", "aacute", "acircumflex", "atilde", "adiaeresis", "aring", "ae", "ccedilla",
    "egrave", "eacute", "ecircumflex", "ediaeresis", "igrave", "iacute", "icircumflex",
    "idiaeresis", "eth", "ntilde", "ograve", "oacute", "ocircumflex", "otilde", "odiaeresis",
    "division", "oslash", "ugrave", "uacute", "ucircumflex", "udiaeresis", "yacute", "thorn",
    "ydiaeresis",
];

/// Control characters with dedicated function keysyms: (codepoint, keysym, name)
const FUNCTION_KEYSYMS: &[(u32, u32, &str)] = &[
    (0x08, 0xff08, "BackSpace"),
    (0x09, 0xff09, "Tab"),
    (0x0a, 0xff0a, "Linefeed"),
    (0x0d, 0xff0d, "Return"),
    (0x1b, 0xff1b, "Escape"),
    (0x7f, 0xffff, "Delete"),
];

/// Legacy named keysyms outside Latin-1: (codepoint, keysym, name)
const LEGACY_KEYSYMS: &[(u32, u32, &str)] = &[
    // Latin-2
    (0x0104, 0x01a1, "Aogonek"),
    (0x0141, 0x01a3, "Lstroke"),
    (0x013d, 0x01a5, "Lcaron"),
    (0x015a, 0x01a6, "Sacute"),
    (0x0160, 0x01a9, "Scaron"),
    (0x015e, 0x01aa, "Scedilla"),
    (0x0164, 0x01ab, "Tcaron"),
    (0x0179, 0x01ac, "Zacute"),
    (0x017d, 0x01ae, "Zcaron"),
    (0x017b, 0x01af, "Zabovedot"),
    (0x0105, 0x01b1, "aogonek"),
    (0x0142, 0x01b3, "lstroke"),
    (0x013e, 0x01b5, "lcaron"),
    (0x015b, 0x01b6, "sacute"),
    (0x0161, 0x01b9, "scaron"),
    (0x015f, 0x01ba, "scedilla"),
    (0x0165, 0x01bb, "tcaron"),
    (0x017a, 0x01bc, "zacute"),
    (0x017e, 0x01be, "zcaron"),
    (0x017c, 0x01bf, "zabovedot"),
    (0x0102, 0x01c3, "Abreve"),
    (0x0106, 0x01c6, "Cacute"),
    (0x010c, 0x01c8, "Ccaron"),
    (0x0118, 0x01ca, "Eogonek"),
    (0x011a, 0x01cc, "Ecaron"),
    (0x010e, 0x01cf, "Dcaron"),
    (0x0143, 0x01d1, "Nacute"),
    (0x0147, 0x01d2, "Ncaron"),
    (0x0150, 0x01d5, "Odoubleacute"),
    (0x0158, 0x01d8, "Rcaron"),
    (0x016e, 0x01d9, "Uring"),
    (0x0170, 0x01db, "Udoubleacute"),
    (0x0103, 0x01e3, "abreve"),
    (0x0107, 0x01e6, "cacute"),
    (0x010d, 0x01e8, "ccaron"),
    (0x0119, 0x01ea, "eogonek"),
    (0x011b, 0x01ec, "ecaron"),
    (0x010f, 0x01ef, "dcaron"),
    (0x0144, 0x01f1, "nacute"),
    (0x0148, 0x01f2, "ncaron"),
    (0x0151, 0x01f5, "odoubleacute"),
    (0x0159, 0x01f8, "rcaron"),
    (0x016f, 0x01f9, "uring"),
    (0x0171, 0x01fb, "udoubleacute"),
    // Latin-3
    (0x0130, 0x02a9, "Iabovedot"),
    (0x011e, 0x02ab, "Gbreve"),
    (0x0131, 0x02b9, "idotless"),
    (0x011f, 0x02bb, "gbreve"),
    // Greek
    (0x0391, 0x07c1, "Greek_ALPHA"),
    (0x0392, 0x07c2, "Greek_BETA"),
    (0x0393, 0x07c3, "Greek_GAMMA"),
    (0x0394, 0x07c4, "Greek_DELTA"),
    (0x0395, 0x07c5, "Greek_EPSILON"),
    (0x0396, 0x07c6, "Greek_ZETA"),
    (0x0397, 0x07c7, "Greek_ETA"),
    (0x0398, 0x07c8, "Greek_THETA"),
    (0x0399, 0x07c9, "Greek_IOTA"),
    (0x039a, 0x07ca, "Greek_KAPPA"),
    (0x039b, 0x07cb, "Greek_LAMDA"),
    (0x039c, 0x07cc, "Greek_MU"),
    (0x039d, 0x07cd, "Greek_NU"),
    (0x039e, 0x07ce, "Greek_XI"),
    (0x039f, 0x07cf, "Greek_OMICRON"),
    (0x03a0, 0x07d0, "Greek_PI"),
    (0x03a1, 0x07d1, "Greek_RHO"),
    (0x03a3, 0x07d2, "Greek_SIGMA"),
    (0x03a4, 0x07d4, "Greek_TAU"),
    (0x03a5, 0x07d5, "Greek_UPSILON"),
    (0x03a6, 0x07d6, "Greek_PHI"),
    (0x03a7, 0x07d7, "Greek_CHI"),
    (0x03a8, 0x07d8, "Greek_PSI"),
    (0x03a9, 0x07d9, "Greek_OMEGA"),
    (0x03b1, 0x07e1, "Greek_alpha"),
    (0x03b2, 0x07e2, "Greek_beta"),
    (0x03b3, 0x07e3, "Greek_gamma"),
    (0x03b4, 0x07e4, "Greek_delta"),
    (0x03b5, 0x07e5, "Greek_epsilon"),
    (0x03b6, 0x07e6, "Greek_zeta"),
    (0x03b7, 0x07e7, "Greek_eta"),
    (0x03b8, 0x07e8, "Greek_theta"),
    (0x03b9, 0x07e9, "Greek_iota"),
    (0x03ba, 0x07ea, "Greek_kappa"),
    (0x03bb, 0x07eb, "Greek_lamda"),
    (0x03bc, 0x07ec, "Greek_mu"),
    (0x03bd, 0x07ed, "Greek_nu"),
    (0x03be, 0x07ee, "Greek_xi"),
    (0x03bf, 0x07ef, "Greek_omicron"),
    (0x03c0, 0x07f0, "Greek_pi"),
    (0x03c1, 0x07f1, "Greek_rho"),
    (0x03c3, 0x07f2, "Greek_sigma"),
    (0x03c2, 0x07f3, "Greek_finalsmallsigma"),
    (0x03c4, 0x07f4, "Greek_tau"),
    (0x03c5, 0x07f5, "Greek_upsilon"),
    (0x03c6, 0x07f6, "Greek_phi"),
    (0x03c7, 0x07f7, "Greek_chi"),
    (0x03c8, 0x07f8, "Greek_psi"),
    (0x03c9, 0x07f9, "Greek_omega"),
    // Latin-9
    (0x0152, 0x13bc, "OE"),
    (0x0153, 0x13bd, "oe"),
    (0x0178, 0x13be, "Ydiaeresis"),
    // Currency
    (0x20ac, 0x20ac, "EuroSign"),
];

/// Canonical name of a keysym value
pub fn keysym_name(value: u32) -> Option<Cow<'static, str>> {
    match value {
        0x20..=0x7e => return Some(Cow::Borrowed(ASCII_NAMES[(value - 0x20) as usize])),
        0xa0..=0xff => return Some(Cow::Borrowed(LATIN1_NAMES[(value - 0xa0) as usize])),
        _ => {}
    }

    if let Some((_, _, name)) = FUNCTION_KEYSYMS
        .iter()
        .chain(LEGACY_KEYSYMS)
        .find(|(_, keysym, _)| *keysym == value)
    {
        return Some(Cow::Borrowed(*name));
    }

    // Unicode keysyms are named U<hex>, never for codepoints Latin-1 already covers
    if (UNICODE_OFFSET + 0x100..=UNICODE_OFFSET + 0x10ffff).contains(&value) {
        return Some(Cow::Owned(format!("U{:04X}", value - UNICODE_OFFSET)));
    }

    None
}

/// Map a Unicode character to its keysym
///
/// Latin-1 printable characters map to the keysym of the same value. Control
/// characters only map when a dedicated function keysym exists.
pub fn unicode_to_keysym(c: char) -> Option<Keysym> {
    let codepoint = c as u32;
    match codepoint {
        0x20..=0x7e | 0xa0..=0xff => return Some(Keysym::from(codepoint)),
        _ => {}
    }

    if let Some((_, keysym, _)) = FUNCTION_KEYSYMS
        .iter()
        .chain(LEGACY_KEYSYMS)
        .find(|(cp, _, _)| *cp == codepoint)
    {
        return Some(Keysym::from(*keysym));
    }

    if codepoint < 0x100 {
        return None;
    }
    Some(Keysym::from(UNICODE_OFFSET + codepoint))
}

/// Resolves a single character to the symbolic name of its key.
///
/// Implemented by [`X11Keysyms`] and by any `Fn(char) -> Option<String>`,
/// which lets callers supply their own table.
pub trait SymbolResolver {
    /// Symbolic name for `c`, or `None` when the namespace has no entry
    fn resolve(&self, c: char) -> Option<String>;
}

impl<F> SymbolResolver for F
where
    F: Fn(char) -> Option<String>,
{
    fn resolve(&self, c: char) -> Option<String> {
        self(c)
    }
}

/// The X11 keysym namespace
#[derive(Debug, Clone, Copy, Default)]
pub struct X11Keysyms;

impl SymbolResolver for X11Keysyms {
    fn resolve(&self, c: char) -> Option<String> {
        unicode_to_keysym(c)
            .and_then(Keysym::name)
            .map(Cow::into_owned)
    }
}
