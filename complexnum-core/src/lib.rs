#![no_std]

//! complexnum core - Complex Number Value Type
//!
//! This crate provides the `Complex` value type, its named arithmetic
//! operations and operator bindings, and the text and binary forms it is
//! read from and written to. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod complex;
pub mod error;
pub mod format;
pub mod ops;
pub mod parsing;

pub use complex::{scalar_add, scalar_multiply, scalar_subtract, Complex};
pub use error::*;
pub use format::{as_f64_slice, from_f64_slice};
pub use parsing::{is_separator, parse_leading, MAX_TOKEN_LEN};
