#![no_main]
use decimal_mul::Digits;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = s.parse::<Digits>() {
            assert_eq!(n.to_string().parse::<Digits>().unwrap(), n);
        }
    }
});
