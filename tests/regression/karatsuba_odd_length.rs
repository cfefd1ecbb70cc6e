// For odd lengths the low half is one digit longer than the high half, so
// the middle term's weight is 10^(n - n/2), not 10^(n/2), and the digit sums
// have to be aligned at their least significant end.

use decimal_mul::{karatsuba_mul, long_mul};

#[test]
fn test() {
    assert_eq!(karatsuba_mul(&[1, 2, 3], &[4, 5, 6]), [5, 6, 0, 8, 8]);
    assert_eq!(karatsuba_mul(&[9, 0, 9], &[9, 0, 9]), [8, 2, 6, 2, 8, 1]);

    let x = [3, 1, 4, 1, 5, 9, 2];
    let y = [2, 7, 1, 8, 2, 8, 1];
    assert_eq!(karatsuba_mul(&x, &y), long_mul(&x, &y));
}
