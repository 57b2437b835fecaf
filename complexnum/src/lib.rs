//! complexnum - Complex Number Value Type with Stream I/O
//!
//! This library provides a double-precision complex number type with named
//! arithmetic operations, operator bindings, and text input/output over
//! standard streams.
//!
//! ## Architecture
//!
//! - **complexnum-core**: The value type, arithmetic, parsing and encoding (no I/O, `no_std`)
//! - **complexnum**: Stream readers and writers over `std::io`
//!
//! ## Quick Start
//!
//! ```rust
//! use complexnum::{read_complex, write_complex, Complex};
//! use std::io::Cursor;
//!
//! fn example() -> std::io::Result<()> {
//!     let a = Complex::new(3.0, 4.0);
//!     let b = Complex::new(1.0, 2.0);
//!
//!     // Named operations and operators agree
//!     assert_eq!(a.multiply(b), a * b);
//!     assert_eq!(a.abs(), 5.0);
//!
//!     // Text round trip
//!     let mut out = Vec::new();
//!     write_complex(&mut out, &a)?;
//!     let back = read_complex(&mut Cursor::new(out))?;
//!     assert_eq!(back, a);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Arithmetic
//!
//! There is no complex/complex division: only division by a real scalar is
//! provided, and it follows IEEE-754 (dividing by zero yields infinities or
//! NaN rather than an error).

// Re-export the value type and its pure helpers
pub use complexnum_core::{
    // Value type and reversed-operand arithmetic
    Complex, scalar_add, scalar_multiply, scalar_subtract,
    // Error handling
    ComplexError, Result,
    // Text and binary helpers
    parse_leading, is_separator, as_f64_slice, from_f64_slice, MAX_TOKEN_LEN,
};

pub mod stream;
pub mod writer;

pub use stream::{read_all, read_complex, to_io_error, ComplexReader};
pub use writer::{write_complex, ComplexWriter, Notation, WriteConfig};
