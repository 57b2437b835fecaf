//! Writing complex numbers to text streams

use std::io::{self, Write};

use complexnum_core::{is_separator, Complex};
use tracing::trace;

/// Write `value` in the default text form (`re im`), with no terminator
pub fn write_complex<W: Write + ?Sized>(writer: &mut W, value: &Complex) -> io::Result<()> {
    trace!(re = value.re, im = value.im, "Writing complex value");
    write!(writer, "{value}")
}

/// How each component is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Plain decimal digits (`1500`, `0.25`)
    #[default]
    Decimal,
    /// Exponent form (`1.5e3`, `2.5e-1`)
    Scientific,
}

/// Configuration for text output
#[derive(Debug, Clone, PartialEq)]
pub struct WriteConfig {
    /// Text placed between the real and imaginary parts
    pub separator: String,
    /// Text written after each value
    pub terminator: String,
    /// Fixed number of fractional digits; `None` writes the shortest
    /// representation that reads back exactly
    pub precision: Option<usize>,
    /// Component notation
    pub notation: Notation,
}

impl WriteConfig {
    /// Set the text between the real and imaginary parts
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the text written after each value
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Round each component to a fixed number of fractional digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the component notation
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Whether output written with this config reads back to the same values
    ///
    /// Requires a non-empty, whitespace-only separator and terminator and
    /// no rounding.
    pub fn is_round_trip(&self) -> bool {
        is_whitespace(&self.separator)
            && is_whitespace(&self.terminator)
            && self.precision.is_none()
    }

    fn write_component<W: Write + ?Sized>(&self, writer: &mut W, value: f64) -> io::Result<()> {
        match (self.notation, self.precision) {
            (Notation::Decimal, None) => write!(writer, "{value}"),
            (Notation::Decimal, Some(precision)) => write!(writer, "{value:.precision$}"),
            (Notation::Scientific, None) => write!(writer, "{value:e}"),
            (Notation::Scientific, Some(precision)) => write!(writer, "{value:.precision$e}"),
        }
    }
}

fn is_whitespace(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(is_separator)
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            terminator: "\n".to_string(),
            precision: None,
            notation: Notation::Decimal,
        }
    }
}

/// Writer for sequences of complex numbers
#[derive(Debug)]
pub struct ComplexWriter<W: Write> {
    inner: W,
    config: WriteConfig,
    values_written: usize,
}

impl<W: Write> ComplexWriter<W> {
    /// Create a writer with the default config (one value per line)
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, WriteConfig::default())
    }

    /// Create a writer with a specific config
    pub fn with_config(inner: W, config: WriteConfig) -> Self {
        Self {
            inner,
            config,
            values_written: 0,
        }
    }

    /// Write one value followed by the configured terminator
    pub fn write(&mut self, value: &Complex) -> io::Result<()> {
        trace!(re = value.re, im = value.im, "Writing complex value");
        self.config.write_component(&mut self.inner, value.re)?;
        self.inner.write_all(self.config.separator.as_bytes())?;
        self.config.write_component(&mut self.inner, value.im)?;
        self.inner.write_all(self.config.terminator.as_bytes())?;
        self.values_written += 1;
        Ok(())
    }

    /// Write every value in `values`
    pub fn write_all(&mut self, values: &[Complex]) -> io::Result<()> {
        values.iter().try_for_each(|value| self.write(value))
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Number of values written so far
    pub fn values_written(&self) -> usize {
        self.values_written
    }

    /// Get the active config
    pub fn config(&self) -> &WriteConfig {
        &self.config
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}
