//! Operator input validation.
//!
//! Control-point writes arrive as raw bytes. Parsing completes fully in
//! local values before any shared field is touched, so a rejected write
//! leaves the configuration exactly as it was.

use crate::error::ControlError;

/// Maximum accepted write length in bytes.
pub const MAX_INPUT: usize = 64;

/// Parses a base-10 signed integer from an operator write.
///
/// Surrounding ASCII whitespace is tolerated (operator writes typically end
/// in a newline). On success returns the parsed value and the number of
/// bytes consumed, which is always the full input length.
pub fn parse_signed(input: &[u8]) -> Result<(i64, usize), ControlError> {
    let text = bounded_text(input)?;
    let value = text.trim().parse().map_err(|_| ControlError::InvalidFormat)?;
    Ok((value, input.len()))
}

/// Parses a base-10 unsigned integer from an operator write.
pub fn parse_unsigned(input: &[u8]) -> Result<(u64, usize), ControlError> {
    let text = bounded_text(input)?;
    let value = text.trim().parse().map_err(|_| ControlError::InvalidFormat)?;
    Ok((value, input.len()))
}

fn bounded_text(input: &[u8]) -> Result<&str, ControlError> {
    if input.len() > MAX_INPUT {
        return Err(ControlError::InputTooLarge(input.len()));
    }
    std::str::from_utf8(input).map_err(|_| ControlError::InvalidFormat)
}
