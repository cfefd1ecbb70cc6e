//! Multiplication strategies and the calculator that switches between them.

use crate::digits::{self, Digits};
use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, Digit};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};
use serde_core::ser::{Serialize, Serializer};

/// The capability shared by all multiplication algorithms.
///
/// Implementations take two digit sequences, most significant digit first,
/// and return their product as a normalized digit sequence. They do not
/// validate their input.
pub trait Multiply {
    /// Multiply `x` by `y`.
    fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit>;
}

impl<'a, M> Multiply for &'a M
where
    M: ?Sized + Multiply,
{
    #[inline]
    fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        (**self).multiply(x, y)
    }
}

/// Grade-school long multiplication, `O(m·n)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Traditional;

impl Multiply for Traditional {
    #[inline]
    fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        math::long_mul(x, y)
    }
}

/// Karatsuba multiplication, `O(n^1.585)`.
///
/// Operands of different lengths are padded with leading zeros to a common
/// length before the recursion starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Karatsuba;

impl Multiply for Karatsuba {
    #[inline]
    fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        math::karatsuba_mul(x, y)
    }
}

/// Selects one of the multiplication algorithms.
///
/// Parses from and displays as its lowercase name. `"long"` and
/// `"schoolbook"` are accepted as aliases of `"traditional"`.
///
/// ```
/// use decimal_mul::Strategy;
///
/// let strategy: Strategy = "Karatsuba".parse().unwrap();
/// assert_eq!(strategy, Strategy::Karatsuba);
/// assert_eq!(strategy.to_string(), "karatsuba");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// See [`Traditional`].
    #[default]
    Traditional,
    /// See [`Karatsuba`].
    Karatsuba,
}

const VARIANTS: &[&str] = &["traditional", "karatsuba"];

impl Strategy {
    /// The lowercase name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Traditional => "traditional",
            Strategy::Karatsuba => "karatsuba",
        }
    }
}

impl Multiply for Strategy {
    #[inline]
    fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        match self {
            Strategy::Traditional => Traditional.multiply(x, y),
            Strategy::Karatsuba => Karatsuba.multiply(x, y),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if ["traditional", "long", "schoolbook"]
            .iter()
            .any(|name| s.eq_ignore_ascii_case(name))
        {
            Ok(Strategy::Traditional)
        } else if s.eq_ignore_ascii_case("karatsuba") {
            Ok(Strategy::Karatsuba)
        } else {
            Err(Error::new(ErrorCode::UnknownStrategy(s.into()), 0))
        }
    }
}

impl Serialize for Strategy {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Strategy, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrategyVisitor;

        impl<'de> Visitor<'de> for StrategyVisitor {
            type Value = Strategy;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a multiplication strategy name")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<Strategy, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|_| de::Error::unknown_variant(value, VARIANTS))
            }
        }

        deserializer.deserialize_str(StrategyVisitor)
    }
}

/// Holds the active multiplication strategy and forwards to it.
///
/// The strategy can be replaced at any time; every call uses whichever one
/// is active at that moment.
///
/// ```
/// use decimal_mul::{Calculator, Strategy};
///
/// let mut calculator = Calculator::default();
/// assert_eq!(calculator.strategy(), Strategy::Traditional);
/// assert_eq!(calculator.multiply(&[7], &[8]), [5, 6]);
///
/// calculator.set_strategy(Strategy::Karatsuba);
/// assert_eq!(calculator.multiply(&[7], &[8]), [5, 6]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Calculator {
    strategy: Strategy,
}

impl Calculator {
    /// Create a calculator using `strategy`.
    pub const fn new(strategy: Strategy) -> Self {
        Calculator { strategy }
    }

    /// The active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        log::debug!("multiplication strategy set to {}", strategy);
        self.strategy = strategy;
    }

    /// Multiply two digit sequences with the active strategy.
    ///
    /// The operands are not validated; see
    /// [`checked_multiply`](Calculator::checked_multiply).
    pub fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        log::trace!(
            "multiplying {} by {} digits using {}",
            x.len(),
            y.len(),
            self.strategy
        );
        self.strategy.multiply(x, y)
    }

    /// Validate both operands, then multiply them with the active strategy.
    ///
    /// Fails if an operand is empty or holds a digit outside `0..=9`. The
    /// reported position is relative to the offending operand.
    ///
    /// ```
    /// use decimal_mul::error::ErrorCode;
    /// use decimal_mul::Calculator;
    ///
    /// let calculator = Calculator::default();
    /// let product = calculator.checked_multiply(&[0, 1, 2], &[1, 0]).unwrap();
    /// assert_eq!(product.as_slice(), [1, 2, 0]);
    ///
    /// let err = calculator.checked_multiply(&[], &[1]).unwrap_err();
    /// assert_eq!(*err.code(), ErrorCode::EmptyOperand);
    /// ```
    pub fn checked_multiply(&self, x: &[Digit], y: &[Digit]) -> Result<Digits> {
        if let Err(err) = digits::check(x).and_then(|()| digits::check(y)) {
            log::debug!("rejected operand: {}", err);
            return Err(err);
        }
        Ok(Digits::from_product(self.multiply(x, y)))
    }

    /// Multiply two validated digit sequences with the active strategy.
    pub fn multiply_digits(&self, x: &Digits, y: &Digits) -> Digits {
        Digits::from_product(self.multiply(x.as_slice(), y.as_slice()))
    }
}

impl Multiply for Calculator {
    #[inline]
    fn multiply(&self, x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        Calculator::multiply(self, x, y)
    }
}
