//! Text parsing for complex numbers
//!
//! The text form is two whitespace-separated floating-point literals, real
//! part first. These are pure functions over `&str`; reading from a stream
//! lives in the std crate and shares the separator and token rules defined
//! here.

use core::str::FromStr;

use crate::{Complex, ComplexError, Result};

/// Longest token a stream reader will buffer, in bytes
///
/// Fits every shortest round-trip rendering of an `f64` (the longest, for
/// subnormals, is a little over 320 bytes) with room for fixed-precision
/// output.
pub const MAX_TOKEN_LEN: usize = 4096;

/// Whether a byte separates tokens in the text form
///
/// Matches the classic C locale whitespace set, including vertical tab.
pub const fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Parse the first two tokens of `input` as a complex number
///
/// Returns the value together with the unconsumed remainder, which starts
/// at the separator following the imaginary token (if any).
pub fn parse_leading(input: &str) -> Result<(Complex, &str)> {
    let (re_token, rest) = next_token(input).ok_or(ComplexError::MissingReal)?;
    let re = parse_real(re_token)?;

    let (im_token, rest) = next_token(rest).ok_or(ComplexError::MissingImaginary)?;
    let im = parse_imaginary(im_token)?;

    Ok((Complex::new(re, im), rest))
}

/// Parse a single real-part token
pub fn parse_real(token: &str) -> Result<f64> {
    token.parse().map_err(|_| ComplexError::InvalidReal)
}

/// Parse a single imaginary-part token
pub fn parse_imaginary(token: &str) -> Result<f64> {
    token.parse().map_err(|_| ComplexError::InvalidImaginary)
}

/// Split off the next token, skipping leading separators
fn next_token(input: &str) -> Option<(&str, &str)> {
    let start = input.bytes().position(|b| !is_separator(b))?;
    let tail = &input[start..];
    let end = tail.bytes().position(is_separator).unwrap_or(tail.len());
    Some((&tail[..end], &tail[end..]))
}

impl FromStr for Complex {
    type Err = ComplexError;

    /// Parse exactly two tokens; anything after them is an error
    fn from_str(s: &str) -> Result<Self> {
        let (value, rest) = parse_leading(s)?;
        if rest.bytes().all(is_separator) {
            Ok(value)
        } else {
            Err(ComplexError::TrailingInput)
        }
    }
}
