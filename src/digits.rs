//! An owned, validated digit sequence.

use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, Digit, RADIX};
use crate::multiply::{Multiply, Strategy};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;
use serde_core::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde_core::ser::{Serialize, Serializer};

/// A non-negative integer as a normalized sequence of decimal digits, most
/// significant digit first.
///
/// Every digit lies in `0..=9`, the sequence is never empty, and it has no
/// leading zero unless it is exactly `[0]`.
///
/// ```
/// use decimal_mul::Digits;
///
/// let n: Digits = "00042".parse().unwrap();
/// assert_eq!(n.as_slice(), [4, 2]);
/// assert_eq!(n.to_string(), "42");
/// assert_eq!(Digits::from(42u32), n);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digits {
    digits: Vec<Digit>,
}

impl Digits {
    /// The number zero, `[0]`.
    pub fn zero() -> Self {
        Digits { digits: vec![0] }
    }

    /// The number one, `[1]`.
    pub fn one() -> Self {
        Digits { digits: vec![1] }
    }

    /// Validate and normalize a digit slice.
    ///
    /// Fails with `ErrorCode::EmptyOperand` on an empty slice and with
    /// `ErrorCode::DigitOutOfRange` on the first digit outside `0..=9`.
    pub fn from_slice(digits: &[Digit]) -> Result<Self> {
        tri!(check(digits));
        Ok(Digits {
            digits: math::normalize(digits).to_vec(),
        })
    }

    // Wrap a product computed from valid digits.
    pub(crate) fn from_product(mut digits: Vec<Digit>) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        debug_assert!(check(&digits).is_ok());
        Digits { digits }
    }

    /// The digits, most significant first.
    pub fn as_slice(&self) -> &[Digit] {
        &self.digits
    }

    /// Unwrap into the underlying buffer.
    pub fn into_vec(self) -> Vec<Digit> {
        self.digits
    }

    /// Number of digits. At least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if this is the number zero.
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Convert to a native integer, or `None` if the value does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(RADIX as u128)?.checked_add(d as u128)
        })
    }

    /// Multiply with the given strategy.
    ///
    /// ```
    /// use decimal_mul::{Digits, Strategy};
    ///
    /// let x = Digits::from(12345u32);
    /// let y = Digits::from(54321u32);
    /// assert_eq!(x.mul_with(&y, Strategy::Traditional), Digits::from(670592745u32));
    /// ```
    pub fn mul_with(&self, other: &Digits, strategy: Strategy) -> Digits {
        Digits::from_product(strategy.multiply(&self.digits, &other.digits))
    }
}

/// Validate a digit slice, reporting one-based positions.
pub(crate) fn check(digits: &[Digit]) -> Result<()> {
    if digits.is_empty() {
        return Err(Error::empty());
    }
    match digits.iter().position(|d| !(0..RADIX).contains(d)) {
        Some(index) => Err(Error::new(
            ErrorCode::DigitOutOfRange(digits[index]),
            index + 1,
        )),
        None => Ok(()),
    }
}

impl Default for Digits {
    fn default() -> Self {
        Digits::zero()
    }
}

impl AsRef<[Digit]> for Digits {
    fn as_ref(&self) -> &[Digit] {
        &self.digits
    }
}

impl From<Digits> for Vec<Digit> {
    fn from(digits: Digits) -> Self {
        digits.digits
    }
}

impl TryFrom<&[Digit]> for Digits {
    type Error = Error;

    fn try_from(digits: &[Digit]) -> Result<Self> {
        Digits::from_slice(digits)
    }
}

impl TryFrom<Vec<Digit>> for Digits {
    type Error = Error;

    fn try_from(mut digits: Vec<Digit>) -> Result<Self> {
        tri!(check(&digits));
        let zeros = digits.len() - math::normalize(&digits).len();
        digits.drain(..zeros);
        Ok(Digits { digits })
    }
}

macro_rules! impl_from_unsigned {
    (
        $($ty:ty),*
    ) => {
        $(
            impl From<$ty> for Digits {
                fn from(value: $ty) -> Self {
                    let mut buffer = itoa::Buffer::new();
                    let digits = buffer
                        .format(value)
                        .bytes()
                        .map(|b| Digit::from(b - b'0'))
                        .collect();
                    Digits { digits }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for Digits {
    type Err = Error;

    /// Parse a numeral of one or more ASCII decimal digits. Leading zeros are
    /// accepted and stripped.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::empty());
        }
        let mut digits = Vec::with_capacity(s.len());
        for (index, ch) in s.chars().enumerate() {
            match ch.to_digit(RADIX as u32) {
                Some(d) => digits.push(Digit::from(d)),
                None => {
                    return Err(Error::new(ErrorCode::InvalidCharacter(ch), index + 1));
                }
            }
        }
        let zeros = digits.len() - math::normalize(&digits).len();
        digits.drain(..zeros);
        Ok(Digits { digits })
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &d in &self.digits {
            tri!(fmt::Write::write_char(f, (b'0' + d as u8) as char));
        }
        Ok(())
    }
}

impl Debug for Digits {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Digits({})", self)
    }
}

impl Serialize for Digits {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digits {
    #[inline]
    fn deserialize<D>(deserializer: D) -> core::result::Result<Digits, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DigitsVisitor;

        impl<'de> Visitor<'de> for DigitsVisitor {
            type Value = Digits;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of decimal digits or a sequence of digits")
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> core::result::Result<Digits, E>
            where
                E: de::Error,
            {
                Ok(Digits::from(value))
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> core::result::Result<Digits, E>
            where
                E: de::Error,
            {
                match u64::try_from(value) {
                    Ok(value) => Ok(Digits::from(value)),
                    Err(_) => Err(de::Error::invalid_value(
                        de::Unexpected::Signed(value),
                        &self,
                    )),
                }
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<Digits, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Digits, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut digits = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(digit) = tri!(seq.next_element::<Digit>()) {
                    digits.push(digit);
                }
                Digits::try_from(digits).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(DigitsVisitor)
    }
}
