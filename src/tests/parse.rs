use crate::error::ControlError;
use crate::parse::{parse_signed, parse_unsigned, MAX_INPUT};

#[test]
fn parses_signed_values() {
    assert_eq!(parse_signed(b"10").unwrap(), (10, 2));
    assert_eq!(parse_signed(b"-3").unwrap(), (-3, 2));
    assert_eq!(parse_signed(b"+7").unwrap(), (7, 2));
    assert_eq!(parse_signed(b"0").unwrap(), (0, 1));
}

#[test]
fn parses_unsigned_values() {
    assert_eq!(parse_unsigned(b"200").unwrap(), (200, 3));
    assert_eq!(parse_unsigned(b"0").unwrap(), (0, 1));
}

#[test]
fn tolerates_surrounding_whitespace() {
    // Operator writes usually arrive newline-terminated.
    assert_eq!(parse_signed(b"42\n").unwrap(), (42, 3));
    assert_eq!(parse_unsigned(b"  100 \n").unwrap(), (100, 7));
}

#[test]
fn consumed_is_full_input_length() {
    let input = b" 5 \n";
    let (_, consumed) = parse_signed(input).unwrap();
    assert_eq!(consumed, input.len());
}

#[test]
fn rejects_oversized_input() {
    let at_limit = vec![b'1'; MAX_INPUT];
    // 64 ones overflow i64, but length alone must not reject them.
    assert!(matches!(
        parse_signed(&at_limit),
        Err(ControlError::InvalidFormat)
    ));

    let over_limit = vec![b'1'; MAX_INPUT + 1];
    assert!(matches!(
        parse_signed(&over_limit),
        Err(ControlError::InputTooLarge(65))
    ));
    assert!(matches!(
        parse_unsigned(&over_limit),
        Err(ControlError::InputTooLarge(65))
    ));
}

#[test]
fn rejects_non_numeric_input() {
    for input in [&b"abc"[..], b"", b"\n", b"12x", b"1.5", b"0x10"] {
        assert!(matches!(
            parse_signed(input),
            Err(ControlError::InvalidFormat)
        ));
    }
}

#[test]
fn rejects_sign_on_unsigned_field() {
    assert!(matches!(
        parse_unsigned(b"-1"),
        Err(ControlError::InvalidFormat)
    ));
}

#[test]
fn rejects_overflowing_values() {
    assert!(matches!(
        parse_signed(b"9223372036854775808"),
        Err(ControlError::InvalidFormat)
    ));
    assert!(matches!(
        parse_unsigned(b"18446744073709551616"),
        Err(ControlError::InvalidFormat)
    ));
}

#[test]
fn accepts_extreme_in_range_values() {
    assert_eq!(
        parse_signed(b"-9223372036854775808").unwrap().0,
        i64::MIN
    );
    assert_eq!(
        parse_unsigned(b"18446744073709551615").unwrap().0,
        u64::MAX
    );
}

#[test]
fn rejects_invalid_utf8() {
    assert!(matches!(
        parse_signed(&[0xff, 0xfe]),
        Err(ControlError::InvalidFormat)
    ));
}
