#![no_main]
use decimal_mul::{karatsuba_mul, long_mul, Digit};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let half = data.len() / 2;
    if half == 0 {
        return;
    }
    let x: Vec<Digit> = data[..half].iter().map(|b| Digit::from(b % 10)).collect();
    let y: Vec<Digit> = data[half..2 * half].iter().map(|b| Digit::from(b % 10)).collect();
    assert_eq!(karatsuba_mul(&x, &y), long_mul(&x, &y));
});
