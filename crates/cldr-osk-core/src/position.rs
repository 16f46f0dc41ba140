// cldr-osk Position Codec
// Parses ISO position codes like "C01" into a row letter and column index

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static POSITION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-E])([0-9]+)$").expect("position pattern is valid"));

/// Physical keyboard row, `A` being the bottom row and `E` the top row
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum Row {
    A,
    B,
    C,
    D,
    E,
}

/// Result of parsing a position code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The row letter
    pub row: Row,
    /// Column index within the row
    pub column: u32,
}

/// Errors that can occur during position parsing
#[derive(Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Code does not match a row letter A-E followed by digits
    InvalidPosition(String),
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionError::InvalidPosition(code) => write!(f, "invalid ISO key name: {}", code),
        }
    }
}

impl std::error::Error for PositionError {}

/// Parse a position code like "C01" into its row and column
///
/// # Examples
/// ```
/// use cldr_osk_core::position::{parse_position, Row};
/// let position = parse_position("D10").unwrap();
/// assert_eq!(position.row, Row::D);
/// assert_eq!(position.column, 10);
/// ```
pub fn parse_position(code: &str) -> Result<Position, PositionError> {
    let invalid = || PositionError::InvalidPosition(code.to_string());

    let captures = POSITION_PATTERN.captures(code).ok_or_else(invalid)?;
    let (_, [letter, digits]) = captures.extract();

    let row = Row::from_str(letter).map_err(|_| invalid())?;
    // Digits may still overflow the column type
    let column = digits.parse::<u32>().map_err(|_| invalid())?;

    Ok(Position { row, column })
}
