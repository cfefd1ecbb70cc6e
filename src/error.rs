//! When an operand handed to a checked entry point is not a digit sequence.

use crate::math::Digit;
use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::io;

/// This type represents all possible errors that can occur when validating,
/// parsing or deserializing a digit sequence.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `decimal_mul::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based position of the offending digit or character.
    ///
    /// The first digit of an operand is at position 1. Errors that do not
    /// point at a single digit, such as an empty operand, report position 0.
    pub fn position(&self) -> usize {
        self.err.position
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::InvalidOperand` - an operand is empty or holds something
    ///   other than decimal digits
    /// - `Category::Data` - an unknown strategy name, or a custom error
    ///   raised through serde
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyOperand
            | ErrorCode::DigitOutOfRange(_)
            | ErrorCode::InvalidCharacter(_) => Category::InvalidOperand,
            ErrorCode::Message(_) | ErrorCode::UnknownStrategy(_) => Category::Data,
        }
    }

    /// Returns true if this error was caused by an operand that is not a
    /// well-formed digit sequence.
    pub fn is_invalid_operand(&self) -> bool {
        self.classify() == Category::InvalidOperand
    }

    /// Returns true if this error was caused by an unknown strategy name or
    /// carries a custom message.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }
}

/// Categorizes the cause of a `decimal_mul::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The operand was empty, held a digit outside `0..=9`, or a numeral
    /// string held a character that is not an ASCII digit.
    InvalidOperand,

    /// A strategy name was not recognized, or the error carries a custom
    /// message.
    Data,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `decimal_mul::Error` into an `io::Error`.
    ///
    /// Invalid operands are turned into `InvalidInput` IO errors, custom
    /// and strategy errors into `InvalidData` IO errors.
    fn from(err: Error) -> Self {
        match err.classify() {
            Category::InvalidOperand => io::Error::new(io::ErrorKind::InvalidInput, err),
            Category::Data => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    position: usize,
}

/// This type describes all possible errors that can occur when validating a
/// digit sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catchall for custom error messages.
    Message(Box<str>),

    /// The operand has no digits.
    EmptyOperand,

    /// A digit lies outside `0..=9`.
    DigitOutOfRange(Digit),

    /// A numeral string holds a character that is not an ASCII digit.
    InvalidCharacter(char),

    /// A strategy name matches none of the known strategies.
    UnknownStrategy(Box<str>),
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode, position: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, position }),
        }
    }

    #[cold]
    pub(crate) fn empty() -> Self {
        Error::new(ErrorCode::EmptyOperand, 0)
    }

    /// Build an error with a custom message.
    #[cold]
    pub fn custom<T: Display>(msg: T) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::Message(msg.to_string().into_boxed_str()),
                position: 0,
            }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::EmptyOperand => f.write_str("operand has no digits"),
            ErrorCode::DigitOutOfRange(digit) => write!(f, "digit out of range: {}", digit),
            ErrorCode::InvalidCharacter(ch) => write!(f, "invalid character {:?}", ch),
            ErrorCode::UnknownStrategy(name) => write!(
                f,
                "unknown strategy `{}`, expected `traditional` or `karatsuba`",
                name
            ),
        }
    }
}

impl serde_core::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.position == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at position {}", self.code, self.position)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, position: {})",
            self.err.code.to_string(),
            self.err.position
        )
    }
}
