// The three Karatsuba sub-products overlap in the result buffer and have to
// be added, not copied over each other. Overwriting loses the carries of the
// middle term and breaks every product of more than one digit.

use decimal_mul::{karatsuba_mul, long_mul, Calculator, Strategy};

#[test]
fn test() {
    let x = [1, 2, 3, 4, 5];
    let y = [5, 4, 3, 2, 1];

    let mut calculator = Calculator::new(Strategy::Traditional);
    let traditional = calculator.multiply(&x, &y);
    calculator.set_strategy(Strategy::Karatsuba);
    let karatsuba = calculator.multiply(&x, &y);

    assert_eq!(traditional, [6, 7, 0, 5, 9, 2, 7, 4, 5]);
    assert_eq!(karatsuba, traditional);
}

#[test]
fn test_overlapping_carries() {
    // Every sub-product is all nines, so each overlap region carries.
    let x = [9, 9, 9, 9, 9, 9];
    assert_eq!(karatsuba_mul(&x, &x), long_mul(&x, &x));
    assert_eq!(karatsuba_mul(&x, &x), [9, 9, 9, 9, 9, 8, 0, 0, 0, 0, 0, 1]);
}
