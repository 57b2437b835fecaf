//! Text rendering and binary encoding for complex numbers
//!
//! The text form written here is the one [`crate::parsing`] reads back:
//! the real part, one space, the imaginary part. Rust's float formatting
//! emits the shortest digits that round-trip, so a written value parses
//! back to the same bits.
//!
//! The binary form is 16 bytes: the real then imaginary part, each as a
//! little-endian IEEE-754 double.

use core::fmt::{self, Write as _};

use crate::{Complex, ComplexError, Result};

impl Complex {
    /// Size of the binary encoding in bytes
    pub const ENCODED_SIZE: usize = 16;

    /// Encode as little-endian bytes, real part first
    pub fn to_le_bytes(&self) -> [u8; Self::ENCODED_SIZE] {
        let mut bytes = [0u8; Self::ENCODED_SIZE];
        bytes[..8].copy_from_slice(&self.re.to_le_bytes());
        bytes[8..].copy_from_slice(&self.im.to_le_bytes());
        bytes
    }

    /// Decode from the first 16 bytes of `bytes`
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::ENCODED_SIZE {
            return Err(ComplexError::InsufficientBuffer);
        }

        let mut re = [0u8; 8];
        let mut im = [0u8; 8];
        re.copy_from_slice(&bytes[0..8]);
        im.copy_from_slice(&bytes[8..16]);

        Ok(Self::new(f64::from_le_bytes(re), f64::from_le_bytes(im)))
    }

    /// Encode into a freshly allocated buffer (requires alloc feature)
    #[cfg(feature = "alloc")]
    pub fn to_bytes(&self) -> alloc::vec::Vec<u8> {
        self.to_le_bytes().to_vec()
    }
}

/// View complex values as interleaved `(re, im)` doubles
pub fn as_f64_slice(values: &[Complex]) -> &[f64] {
    bytemuck::cast_slice(values)
}

/// View interleaved `(re, im)` doubles as complex values
///
/// Fails when the slice length is odd.
pub fn from_f64_slice(components: &[f64]) -> Result<&[Complex]> {
    if components.len() % 2 != 0 {
        return Err(ComplexError::OddComponentCount);
    }
    bytemuck::try_cast_slice(components).map_err(|_| ComplexError::OddComponentCount)
}

/// Counts the characters a rendering would produce
struct CharCount(usize);

impl fmt::Write for CharCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

/// Write `args` honouring the formatter's width, fill and alignment
///
/// The pair is padded as a whole, left-aligned by default like a string.
fn write_padded(f: &mut fmt::Formatter<'_>, args: fmt::Arguments<'_>) -> fmt::Result {
    let Some(width) = f.width() else {
        return f.write_fmt(args);
    };

    let mut count = CharCount(0);
    fmt::write(&mut count, args)?;
    let padding = width.saturating_sub(count.0);
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        _ => (0, padding),
    };

    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_fmt(args)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

/// Renders `re im`; precision applies to each component, width, fill and
/// alignment to the pair
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write_padded(
                f,
                format_args!("{:.*} {:.*}", precision, self.re, precision, self.im),
            ),
            None => write_padded(f, format_args!("{} {}", self.re, self.im)),
        }
    }
}

impl fmt::LowerExp for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write_padded(
                f,
                format_args!("{:.*e} {:.*e}", precision, self.re, precision, self.im),
            ),
            None => write_padded(f, format_args!("{:e} {:e}", self.re, self.im)),
        }
    }
}
