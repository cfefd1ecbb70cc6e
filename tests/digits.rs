use decimal_mul::error::ErrorCode;
use decimal_mul::{Digit, Digits, Strategy};
use serde::{Deserialize, Serialize};

#[test]
fn test_parse() {
    let n: Digits = "5678".parse().unwrap();
    assert_eq!(n.as_slice(), [5, 6, 7, 8]);
    assert_eq!(n.len(), 4);
}

#[test]
fn test_parse_strips_leading_zeros() {
    let n: Digits = "0005678".parse().unwrap();
    assert_eq!(n.as_slice(), [5, 6, 7, 8]);

    let zero: Digits = "0000".parse().unwrap();
    assert_eq!(zero, Digits::zero());
    assert!(zero.is_zero());
}

#[test]
fn test_parse_errors() {
    let err = "".parse::<Digits>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EmptyOperand);
    assert_eq!(err.to_string(), "operand has no digits");

    let err = "12a4".parse::<Digits>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidCharacter('a'));
    assert_eq!(err.position(), 3);
    assert_eq!(err.to_string(), "invalid character 'a' at position 3");

    let err = "-12".parse::<Digits>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidCharacter('-'));
    assert_eq!(err.position(), 1);
}

#[test]
fn test_display() {
    assert_eq!(Digits::from(670_592_745u32).to_string(), "670592745");
    assert_eq!(Digits::zero().to_string(), "0");
    assert_eq!(format!("{:?}", Digits::from(42u8)), "Digits(42)");
}

#[test]
fn test_from_unsigned() {
    assert_eq!(Digits::from(0u8).as_slice(), [0]);
    assert_eq!(Digits::from(123u8).as_slice(), [1, 2, 3]);
    assert_eq!(Digits::from(12345u16).as_slice(), [1, 2, 3, 4, 5]);
    assert_eq!(Digits::from(1_234_567u32).as_slice(), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        Digits::from(123_456_789_012u64).as_slice(),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2]
    );
    assert_eq!(Digits::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(Digits::from(7usize).as_slice(), [7]);
}

#[test]
fn test_to_u128() {
    assert_eq!(Digits::from(u128::MAX).to_u128(), Some(u128::MAX));
    assert_eq!(Digits::zero().to_u128(), Some(0));

    let too_big = Digits::from(u128::MAX).mul_with(&Digits::from(10u8), Strategy::Traditional);
    assert_eq!(too_big.to_u128(), None);
}

#[test]
fn test_try_from_slice() {
    let digits: &[Digit] = &[0, 0, 4, 2];
    let n = Digits::try_from(digits).unwrap();
    assert_eq!(n.as_slice(), [4, 2]);

    let digits: &[Digit] = &[4, 12];
    let err = Digits::try_from(digits).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DigitOutOfRange(12));
    assert_eq!(err.position(), 2);

    let digits: &[Digit] = &[];
    assert!(Digits::try_from(digits).unwrap_err().is_invalid_operand());
}

#[test]
fn test_try_from_vec() {
    let n = Digits::try_from(vec![0, 1, 0]).unwrap();
    assert_eq!(n.into_vec(), [1, 0]);

    let n = Digits::try_from(vec![0, 0]).unwrap();
    assert_eq!(Vec::from(n), [0]);
}

#[test]
fn test_serialize() {
    let n = Digits::from(670_592_745u32);
    assert_eq!(serde_json::to_string(&n).unwrap(), r#""670592745""#);
    assert_eq!(serde_json::to_string(&Strategy::Karatsuba).unwrap(), r#""karatsuba""#);
}

#[test]
fn test_deserialize() {
    let n: Digits = serde_json::from_str(r#""00123""#).unwrap();
    assert_eq!(n, Digits::from(123u8));

    let n: Digits = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(n, Digits::from(u64::MAX));

    let n: Digits = serde_json::from_str("[0, 4, 2]").unwrap();
    assert_eq!(n, Digits::from(42u8));
}

#[test]
fn test_deserialize_errors() {
    let err = serde_json::from_str::<Digits>(r#""12x""#).unwrap_err();
    assert!(err.to_string().starts_with("invalid character 'x' at position 3"));

    let err = serde_json::from_str::<Digits>("[1, 10]").unwrap_err();
    assert!(err.to_string().starts_with("digit out of range: 10 at position 2"));

    let err = serde_json::from_str::<Digits>("-5").unwrap_err();
    assert!(err.to_string().starts_with("invalid value: integer `-5`"));

    let err = serde_json::from_str::<Strategy>(r#""fft""#).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("unknown variant `fft`, expected `traditional` or `karatsuba`"));
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Job {
    strategy: Strategy,
    x: Digits,
    y: Digits,
}

#[test]
fn test_config_round_trip() {
    let job: Job = serde_json::from_str(
        r#"{"strategy": "Schoolbook", "x": "12345", "y": [5, 4, 3, 2, 1]}"#,
    )
    .unwrap();
    assert_eq!(job.strategy, Strategy::Traditional);
    assert_eq!(job.x.mul_with(&job.y, job.strategy).to_string(), "670592745");

    let json = serde_json::to_string(&job).unwrap();
    assert_eq!(json, r#"{"strategy":"traditional","x":"12345","y":"54321"}"#);
    assert_eq!(serde_json::from_str::<Job>(&json).unwrap(), job);
}
