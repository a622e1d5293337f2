//! Comma-separated sequence parsing and validation.

use vitrine_core::{InputError, MAX_SEQUENCE_LEN};

/// Parse user-typed comma-separated integers into a sequence.
///
/// Accepts digits, commas, and whitespace; any other character is
/// rejected outright so an interactive consumer can surface the
/// offending keystroke. Tokens that are empty or fail to parse as
/// `i32` (stray commas, out-of-range runs of digits) are skipped
/// rather than aborting the parse, matching forgiving form-input
/// behavior.
///
/// # Errors
///
/// - [`InputError::InvalidCharacter`] for the first disallowed
///   character.
/// - [`InputError::Empty`] when no token parses.
/// - [`InputError::TooLong`] when more than
///   [`MAX_SEQUENCE_LEN`] values parse.
///
/// # Examples
///
/// ```
/// use vitrine_input::parse_sequence;
///
/// assert_eq!(parse_sequence("5, 2, 8").unwrap(), vec![5, 2, 8]);
/// assert_eq!(parse_sequence("5,,2,").unwrap(), vec![5, 2]);
/// assert!(parse_sequence("5;2").is_err());
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<i32>, InputError> {
    if let Some(ch) = text
        .chars()
        .find(|c| !c.is_ascii_digit() && *c != ',' && !c.is_whitespace())
    {
        return Err(InputError::InvalidCharacter { ch });
    }

    let values: Vec<i32> = text
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();

    if values.is_empty() {
        return Err(InputError::Empty);
    }
    if values.len() > MAX_SEQUENCE_LEN {
        return Err(InputError::TooLong {
            len: values.len(),
            max: MAX_SEQUENCE_LEN,
        });
    }

    Ok(values)
}
