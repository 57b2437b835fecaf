//! Error types for complex number parsing and decoding
//!
//! Arithmetic never produces an error. Only text parsing and binary
//! decoding can fail.

/// Errors that can occur while parsing or decoding a complex number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexError {
    /// Input ended before the real component
    MissingReal,
    /// Input ended before the imaginary component
    MissingImaginary,
    /// Real component token is not a floating-point literal
    InvalidReal,
    /// Imaginary component token is not a floating-point literal
    InvalidImaginary,
    /// Extra tokens after the imaginary component
    TrailingInput,
    /// Insufficient buffer space
    InsufficientBuffer,
    /// Component slice does not hold whole (real, imaginary) pairs
    OddComponentCount,
    /// A token exceeded [`crate::parsing::MAX_TOKEN_LEN`] bytes
    TokenTooLong,
}

impl ComplexError {
    /// Whether the input simply ran out, as opposed to being malformed
    pub const fn is_eof(self) -> bool {
        matches!(self, ComplexError::MissingReal | ComplexError::MissingImaginary)
    }
}

impl core::fmt::Display for ComplexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ComplexError::MissingReal => "Missing real component",
            ComplexError::MissingImaginary => "Missing imaginary component",
            ComplexError::InvalidReal => "Invalid real component",
            ComplexError::InvalidImaginary => "Invalid imaginary component",
            ComplexError::TrailingInput => "Unexpected input after imaginary component",
            ComplexError::InsufficientBuffer => "Insufficient buffer space",
            ComplexError::OddComponentCount => "Odd number of components",
            ComplexError::TokenTooLong => "Token exceeds maximum length",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for ComplexError {}

/// Result type for complex number parsing and decoding
pub type Result<T> = core::result::Result<T, ComplexError>;
