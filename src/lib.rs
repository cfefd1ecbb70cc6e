//! # decimal_mul
//!
//! Multiplication of arbitrary-length non-negative integers stored as decimal
//! digit sequences, with two interchangeable algorithms:
//!
//! - [`Traditional`], grade-school long multiplication in `O(n·m)`.
//! - [`Karatsuba`], divide-and-conquer multiplication in `O(n^1.585)`.
//!
//! Digit sequences are plain slices of [`Digit`], most significant digit
//! first, so `[1, 2, 3]` is the number 123.
//!
//! ```
//! use decimal_mul::{Calculator, Strategy};
//!
//! let mut calculator = Calculator::new(Strategy::Traditional);
//! let x = [1, 2, 3, 4, 5];
//! let y = [5, 4, 3, 2, 1];
//! assert_eq!(calculator.multiply(&x, &y), [6, 7, 0, 5, 9, 2, 7, 4, 5]);
//!
//! calculator.set_strategy(Strategy::Karatsuba);
//! assert_eq!(calculator.multiply(&x, &y), [6, 7, 0, 5, 9, 2, 7, 4, 5]);
//! ```
//!
//! # Checked multiplication
//!
//! The algorithms themselves do not validate their input: an empty operand
//! or a digit outside `0..=9` produces a meaningless result. Use
//! [`Calculator::checked_multiply`] or the [`Digits`] type when operands come
//! from outside the program.
//!
//! ```
//! use decimal_mul::{Calculator, Digits, Strategy};
//!
//! # fn main() -> decimal_mul::Result<()> {
//! let x: Digits = "12345".parse()?;
//! let y: Digits = "54321".parse()?;
//! let product = x.mul_with(&y, Strategy::Karatsuba);
//! assert_eq!(product.to_string(), "670592745");
//!
//! let calculator = Calculator::default();
//! let err = calculator.checked_multiply(&[1, 12, 3], &[4]).unwrap_err();
//! assert!(err.is_invalid_operand());
//! assert_eq!(err.to_string(), "digit out of range: 12 at position 2");
//! # Ok(())
//! # }
//! ```
//!
//! # Building blocks
//!
//! The primitives the multipliers are built from are public too:
//! [`normalize`] strips leading zeros and [`subtract`] performs digit-wise
//! subtraction with borrow. Both tolerate digits outside `0..=9` in their
//! input, which the Karatsuba recursion relies on.
//!
//! # No-std support
//!
//! This crate currently requires an allocator. Disable the default `std`
//! feature and enable `alloc` to use it without the rest of the standard
//! library:
//!
//! ```toml
//! [dependencies]
//! decimal_mul = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/decimal_mul/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::needless_range_loop,
    clippy::comparison_chain,
    // things are often more readable this way
    clippy::module_name_repetitions,
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "decimal_mul requires that either `std` (default) or `alloc` feature is enabled"
}

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Not public API. Used in place of `?` where the error type needs no
// conversion.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

#[doc(inline)]
pub use crate::digits::Digits;
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::math::{karatsuba_mul, long_mul, normalize, subtract, Digit, RADIX};
#[doc(inline)]
pub use crate::multiply::{Calculator, Karatsuba, Multiply, Strategy, Traditional};

pub mod digits;
pub mod error;
pub mod math;
pub mod multiply;
