// A single digit product keeps its carry in the high slot: 7 * 8 is [5, 6],
// with index 0 the most significant digit.

use decimal_mul::{karatsuba_mul, Karatsuba, Multiply};

#[test]
fn test() {
    assert_eq!(karatsuba_mul(&[7], &[8]), [5, 6]);
    assert_eq!(Karatsuba.multiply(&[9], &[9]), [8, 1]);
    // Products below ten are normalized down to one digit.
    assert_eq!(Karatsuba.multiply(&[2], &[4]), [8]);
}
