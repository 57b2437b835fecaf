//! Reading complex numbers from text streams
//!
//! Values are read token by token straight from a [`BufRead`] buffer:
//! leading separators are skipped, exactly two tokens are taken, and the
//! separator after the second token is left in the stream for the next
//! reader.

use std::io::{self, BufRead, ErrorKind};

use complexnum_core::parsing::{is_separator, parse_imaginary, parse_real, MAX_TOKEN_LEN};
use complexnum_core::{Complex, ComplexError};
use tracing::{debug, trace};

/// Read one complex number from `reader`
///
/// Fails with [`ErrorKind::UnexpectedEof`] when fewer than two tokens remain
/// and with [`ErrorKind::InvalidData`] when a token is not a float.
pub fn read_complex<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Complex> {
    let mut token = Vec::new();
    read_value(reader, &mut token)?.ok_or_else(|| to_io_error(ComplexError::MissingReal))
}

/// Read every complex number remaining in `reader`
pub fn read_all<R: BufRead>(reader: R) -> io::Result<Vec<Complex>> {
    ComplexReader::new(reader).collect()
}

/// Map a parse error onto the stream error kinds
pub fn to_io_error(err: ComplexError) -> io::Error {
    let kind = if err.is_eof() {
        ErrorKind::UnexpectedEof
    } else {
        ErrorKind::InvalidData
    };
    io::Error::new(kind, err)
}

/// Iterator-style reader over a sequence of complex numbers
///
/// Iteration ends cleanly when the stream is exhausted between values and
/// stops after the first error. Later calls to [`ComplexReader::read`]
/// report the kind of that first error.
#[derive(Debug)]
pub struct ComplexReader<R> {
    inner: R,
    token: Vec<u8>,
    finished: bool,
    failure: Option<ErrorKind>,
    values_read: usize,
}

impl<R: BufRead> ComplexReader<R> {
    /// Wrap a buffered reader
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            token: Vec::with_capacity(32),
            finished: false,
            failure: None,
            values_read: 0,
        }
    }

    /// Read the next value, treating end of stream as an error
    ///
    /// Once the reader has stopped on an error, every further call fails
    /// with that error's kind.
    pub fn read(&mut self) -> io::Result<Complex> {
        match self.next() {
            Some(result) => result,
            None => match self.failure {
                Some(kind) => Err(io::Error::new(kind, "reader stopped after an earlier error")),
                None => Err(to_io_error(ComplexError::MissingReal)),
            },
        }
    }

    /// Kind of the error that stopped the reader, if any
    pub fn failure(&self) -> Option<ErrorKind> {
        self.failure
    }

    /// Number of values successfully read so far
    pub fn values_read(&self) -> usize {
        self.values_read
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> Iterator for ComplexReader<R> {
    type Item = io::Result<Complex>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match read_value(&mut self.inner, &mut self.token) {
            Ok(Some(value)) => {
                self.values_read += 1;
                Some(Ok(value))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                self.failure = Some(err.kind());
                Some(Err(err))
            }
        }
    }
}

/// Read one value; `Ok(None)` means the stream ended before any token
fn read_value<R: BufRead + ?Sized>(
    reader: &mut R,
    token: &mut Vec<u8>,
) -> io::Result<Option<Complex>> {
    if !read_token(reader, token)? {
        return Ok(None);
    }
    let re = parse_token(token, parse_real, ComplexError::InvalidReal)?;

    if !read_token(reader, token)? {
        debug!(re, "Stream ended before imaginary component");
        return Err(to_io_error(ComplexError::MissingImaginary));
    }
    let im = parse_token(token, parse_imaginary, ComplexError::InvalidImaginary)?;

    trace!(re, im, "Read complex value");
    Ok(Some(Complex::new(re, im)))
}

fn parse_token(
    token: &[u8],
    parse: fn(&str) -> complexnum_core::Result<f64>,
    invalid: ComplexError,
) -> io::Result<f64> {
    std::str::from_utf8(token)
        .map_err(|_| invalid)
        .and_then(parse)
        .map_err(|err| {
            debug!(
                token = %String::from_utf8_lossy(token),
                error = %err,
                "Failed to parse complex component"
            );
            to_io_error(err)
        })
}

/// Read the next separator-delimited token into `token`
///
/// Returns `false` if the stream ended before a token started. The
/// separator that ends the token is not consumed. Tokens longer than
/// [`MAX_TOKEN_LEN`] fail with [`ErrorKind::InvalidData`].
fn read_token<R: BufRead + ?Sized>(reader: &mut R, token: &mut Vec<u8>) -> io::Result<bool> {
    token.clear();

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(false);
        }
        let len = available.len();
        let skip = available.iter().take_while(|&&b| is_separator(b)).count();
        reader.consume(skip);
        if skip < len {
            break;
        }
    }

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&b| is_separator(b)) {
            Some(end) => {
                token.extend_from_slice(&available[..end]);
                reader.consume(end);
                check_token_len(token)?;
                break;
            }
            None => {
                let len = available.len();
                token.extend_from_slice(available);
                reader.consume(len);
                check_token_len(token)?;
            }
        }
    }

    Ok(true)
}

fn check_token_len(token: &[u8]) -> io::Result<()> {
    if token.len() > MAX_TOKEN_LEN {
        debug!(len = token.len(), "Token exceeds maximum length");
        return Err(to_io_error(ComplexError::TokenTooLong));
    }
    Ok(())
}
