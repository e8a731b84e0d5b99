//! Text input: turning user-entered text into a collection and a target.

/// Array shown before the user types anything.
pub const DEFAULT_ARRAY_TEXT: &str = "1 3 5 7 9 11 13 15";

/// The preset example collection: odd numbers 1 through 29.
pub const PRESET_EXAMPLE: [i64; 15] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29];

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No values were entered.
    Empty,
    /// A token is not a signed 64-bit integer.
    NotAnInteger { token: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("no values entered"),
            Self::NotAnInteger { token } => write!(f, "not an integer: {token:?}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse whitespace-separated integers.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank text and
/// [`InputError::NotAnInteger`] for the first token that does not parse.
pub fn parse_collection(text: &str) -> Result<Vec<i64>, InputError> {
    let values = text
        .split_whitespace()
        .map(parse_integer)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

/// Parse a single target value, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank text and
/// [`InputError::NotAnInteger`] otherwise.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(InputError::Empty);
    }
    parse_integer(token)
}

/// Render a collection the way it is typed: space-separated.
#[must_use]
pub fn format_collection(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_integer(token: &str) -> Result<i64, InputError> {
    token.parse().map_err(|_| InputError::NotAnInteger {
        token: token.to_string(),
    })
}
