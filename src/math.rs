//! Building-blocks for decimal digit-sequence arithmetic.
//!
//! These algorithms assume big-endian order for the digit buffers, so for a
//! `vec![1, 2, 3]`, `1` is the most significant digit and `3` is the least
//! significant digit: the buffer holds the number 123.
//!
//! Intermediate buffers are allowed to hold digits outside `0..=9`. Long
//! multiplication leaves a slot above 9 until a later iteration of the same
//! row settles it, Karatsuba recurses on uncarried digit sums, and
//! subtraction may leave a negative digit below an oversized subtrahend
//! digit. Carries and borrows are resolved lazily, by [`settle`] or by the
//! algorithm itself, before a result leaves the public functions below.

use alloc::vec;
use alloc::vec::Vec;

// ALIASES
// -------

/// Type for a single digit of a digit sequence.
///
/// Signed and 64 bits wide: buffers in flight hold uncarried sums, partial
/// products of those sums, and pending borrows, none of which fit in `0..=9`.
pub type Digit = i64;

/// Base of the positional notation.
pub const RADIX: Digit = 10;

// SCALAR
// ------

// Digit-to-digit operations, the building-blocks for buffer operations.

mod scalar {
    use super::*;

    /// Multiply two digits and add the current content of the target slot.
    ///
    /// Returns the (carry, units) components.
    #[inline]
    pub fn mul(x: Digit, y: Digit, acc: Digit) -> (Digit, Digit) {
        let z = x * y + acc;
        (z / RADIX, z % RADIX)
    }

    /// Subtract `y` and a pending borrow from `x`.
    ///
    /// Returns the (digit, borrow) components. Only a single radix is ever
    /// borrowed, so for very negative differences the digit stays negative.
    #[inline]
    pub fn sub(x: Digit, y: Digit, borrow: Digit) -> (Digit, Digit) {
        let diff = x - borrow - y;
        if diff < 0 {
            (diff + RADIX, 1)
        } else {
            (diff, 0)
        }
    }

    /// Split an out-of-range digit into a (carry, digit) pair with the digit
    /// in `0..RADIX`. The carry is negative for negative input.
    #[inline]
    pub fn split(x: Digit) -> (Digit, Digit) {
        (x.div_euclid(RADIX), x.rem_euclid(RADIX))
    }
}

// SMALL
// -----

// Operations on a single buffer.

mod small {
    use super::*;

    /// Number of leading zero digits, never counting the last digit.
    #[inline]
    pub fn leading_zeros(x: &[Digit]) -> usize {
        let mut count = 0;
        while count + 1 < x.len() && x[count] == 0 {
            count += 1;
        }
        count
    }

    /// Strip leading zeros, as a view into `x`.
    #[inline]
    pub fn normalize(x: &[Digit]) -> &[Digit] {
        &x[leading_zeros(x)..]
    }

    /// Strip leading zeros in place.
    #[inline]
    pub fn normalize_vec(x: &mut Vec<Digit>) {
        let count = leading_zeros(x);
        if count != 0 {
            x.drain(..count);
        }
    }

    /// Resolve every digit into `0..RADIX` by carrying or borrowing towards
    /// the most significant end. The most significant slot absorbs what is
    /// left, so it may stay above 9.
    pub fn settle(x: &mut [Digit]) {
        let mut carry = 0;
        for xi in x.iter_mut().skip(1).rev() {
            let (c, digit) = scalar::split(*xi + carry);
            *xi = digit;
            carry = c;
        }
        if let Some(top) = x.first_mut() {
            *top += carry;
        }
    }

    /// Copy `x` into a buffer of `len` digits, padding with leading zeros.
    pub fn pad(x: &[Digit], len: usize) -> Vec<Digit> {
        let mut z = Vec::with_capacity(len.max(x.len()));
        z.resize(len.saturating_sub(x.len()), 0);
        z.extend_from_slice(x);
        z
    }
}

// LARGE
// -----

// Buffer-to-buffer operations.

mod large {
    use super::*;

    // ADDITION

    /// AddAssign without carrying.
    ///
    /// The least significant digit of `y` lands `shift` positions above the
    /// least significant digit of `x`. Requires `y.len() + shift <= x.len()`.
    #[inline]
    pub fn iadd_impl(x: &mut [Digit], y: &[Digit], shift: usize) {
        debug_assert!(y.len() + shift <= x.len());
        let end = x.len() - shift;
        let start = end - y.len();
        for (xi, yi) in x[start..end].iter_mut().zip(y) {
            *xi += *yi;
        }
    }

    // SUBTRACTION

    /// Subtract `y` from `x` with borrow, `y` aligned to the least
    /// significant end of `x`.
    ///
    /// The result has the length of `x` and is not normalized. It denotes
    /// `x - y` only if `x >= y`.
    pub fn sub(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        debug_assert!(y.len() <= x.len());
        let mut z = x.to_vec();
        let mut ys = y.iter().rev();
        let mut borrow = 0;
        for zi in z.iter_mut().rev() {
            let yi = ys.next().copied().unwrap_or(0);
            let (digit, b) = scalar::sub(*zi, yi, borrow);
            *zi = digit;
            borrow = b;
        }
        z
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Every partial product is added into its units slot and the carry is
    /// moved one slot up right away, so a slot only holds a value above 9
    /// until the next (smaller `j`) step of the same row reads it back.
    pub fn long_mul(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        let (m, n) = (x.len(), y.len());
        let mut z = vec![0; m + n];

        for i in (0..m).rev() {
            for j in (0..n).rev() {
                let (carry, units) = scalar::mul(x[i], y[j], z[i + j + 1]);
                z[i + j] += carry;
                z[i + j + 1] = units;
            }
        }

        small::normalize_vec(&mut z);
        z
    }

    /// Split a buffer at `mid`, into (hi, lo).
    #[inline]
    pub fn karatsuba_split(z: &[Digit], mid: usize) -> (&[Digit], &[Digit]) {
        (&z[..mid], &z[mid..])
    }

    /// Digit-wise `hi + lo` aligned at the least significant end, without
    /// carrying. Has the length of `lo`, which is never shorter than `hi`.
    #[inline]
    pub fn karatsuba_sum(hi: &[Digit], lo: &[Digit]) -> Vec<Digit> {
        let mut z = lo.to_vec();
        iadd_impl(&mut z, hi, 0);
        z
    }

    /// Karatsuba multiplication of two buffers of equal length `n`.
    ///
    /// Returns exactly `2n` settled digits, not normalized. Single digit
    /// products come back as `[carry, units]`.
    pub fn karatsuba_mul(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        debug_assert_eq!(x.len(), y.len());
        let n = x.len();
        if n <= 1 {
            let product = x.first().copied().unwrap_or(0) * y.first().copied().unwrap_or(0);
            return if product >= RADIX {
                vec![product / RADIX, product % RADIX]
            } else {
                vec![0, product]
            };
        }

        // Do our 3 multiplications.
        let mid = n / 2;
        let lo_len = n - mid;
        let (a, b) = karatsuba_split(x, mid);
        let (c, d) = karatsuba_split(y, mid);
        let ac = karatsuba_mul(a, c);
        let bd = karatsuba_mul(b, d);
        let abcd = karatsuba_mul(&karatsuba_sum(a, b), &karatsuba_sum(c, d));

        // `abcd - ac - bd`, settled after each step so the next subtraction
        // sees canonical digits.
        let mut z1 = sub(&abcd, &ac);
        small::settle(&mut z1);
        let mut z1 = sub(&z1, &bd);
        small::settle(&mut z1);

        // Create our result, which is equal to, in big-endian order:
        //  ac shifted 2*lo_len digits, z1 shifted lo_len digits, bd.
        // With an even `n` those start at offsets 0, mid and 2*mid.
        let mut result = vec![0; 2 * n];
        iadd_impl(&mut result, &ac, 2 * lo_len);
        iadd_impl(&mut result, &z1, lo_len);
        iadd_impl(&mut result, &bd, 0);
        small::settle(&mut result);

        result
    }
}

// API
// ---

/// Strip the leading zero digits of a digit sequence.
///
/// Returns the shortest suffix of `x` without a leading zero. A sequence of
/// only zeros collapses to its last digit, `[0]`.
///
/// ```
/// use decimal_mul::normalize;
///
/// assert_eq!(normalize(&[0, 0, 4, 2]), [4, 2]);
/// assert_eq!(normalize(&[0, 0, 0]), [0]);
/// ```
#[inline]
pub fn normalize(x: &[Digit]) -> &[Digit] {
    small::normalize(x)
}

/// Subtract `y` from `x` digit by digit, propagating borrows from the least
/// significant end.
///
/// `y` may be shorter than `x` and is treated as if padded with leading
/// zeros. The result has the length of `x` and is not normalized.
///
/// The caller must guarantee that `x` denotes a value no smaller than `y`.
/// Otherwise the digits of the result are meaningless; this is not checked.
///
/// ```
/// use decimal_mul::subtract;
///
/// assert_eq!(subtract(&[1, 0, 0, 0], &[1]), [0, 9, 9, 9]);
/// ```
#[inline]
pub fn subtract(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    large::sub(x, y)
}

/// Resolve out-of-range digits in place by carrying and borrowing towards
/// the most significant digit.
///
/// Afterwards every digit but the first lies in `0..=9`. The first digit
/// absorbs whatever carry is left over and may exceed 9, or be negative if
/// the buffer denotes a negative value.
///
/// ```
/// use decimal_mul::math::settle;
///
/// let mut digits = [0, 13, -2];
/// settle(&mut digits);
/// assert_eq!(digits, [1, 2, 8]);
/// ```
#[inline]
pub fn settle(x: &mut [Digit]) {
    small::settle(x)
}

/// Multiply two digit sequences with grade-school long multiplication.
///
/// Runs in `O(m·n)` and returns a normalized product.
///
/// ```
/// use decimal_mul::long_mul;
///
/// assert_eq!(long_mul(&[1, 2], &[3, 4]), [4, 0, 8]);
/// ```
#[inline]
pub fn long_mul(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    large::long_mul(x, y)
}

/// Multiply two digit sequences with the Karatsuba algorithm.
///
/// The recursion needs operands of equal length; shorter operands are padded
/// with leading zeros first. Returns a normalized product.
///
/// ```
/// use decimal_mul::karatsuba_mul;
///
/// assert_eq!(karatsuba_mul(&[7], &[8]), [5, 6]);
/// assert_eq!(karatsuba_mul(&[1, 2, 3], &[4]), [4, 9, 2]);
/// ```
pub fn karatsuba_mul(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    let mut z = if x.len() == y.len() {
        large::karatsuba_mul(x, y)
    } else {
        let n = x.len().max(y.len());
        log::trace!(
            "padding karatsuba operands of {} and {} digits to {}",
            x.len(),
            y.len(),
            n
        );
        large::karatsuba_mul(&small::pad(x, n), &small::pad(y, n))
    };
    small::normalize_vec(&mut z);
    z
}

// TESTS
// -----
