//! Edge cases around malformed input and error reporting.

use cpf::*;

#[test]
fn every_single_digit_change_is_detected() {
    let valid = "11144477735";
    for pos in 0..CPF_LEN {
        for d in b'0'..=b'9' {
            let mut bytes = valid.as_bytes().to_vec();
            if bytes[pos] == d {
                continue;
            }
            bytes[pos] = d;
            let mutated = String::from_utf8(bytes).unwrap();
            assert_eq!(validate(&mutated), Ok(false), "{mutated} should be rejected");
        }
    }
}

#[test]
fn validate_masked_cpf_is_false() {
    assert_eq!(validate("312.496.070-00"), Ok(false));
}

#[test]
fn validate_whitespace_is_false() {
    assert_eq!(validate(" 1249607000"), Ok(false));
    assert_eq!(validate("31249607000 "), Ok(false));
}

#[test]
fn validate_long_is_false() {
    assert_eq!(validate("312496070000"), Ok(false));
}

#[test]
fn validate_unicode_digits_is_false() {
    // Arabic-Indic digits are not ASCII digits.
    assert_eq!(validate("٣١٢٤٩٦٠٧٠٠٠"), Ok(false));
}

#[test]
fn validate_non_digit_check_digits_is_false() {
    assert_eq!(validate("312496070ab"), Ok(false));
}

#[test]
fn compute_with_letters_is_invalid_argument() {
    let err = compute_check_digits("ABCDEFGHI").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument 'digits' is invalid: non-digit character 'A'");
}

#[test]
fn compute_wrong_length_message() {
    let err = compute_check_digits("31249607").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument 'digits' is invalid: expected 9 digits, got 8");
}

#[test]
fn compute_empty_message() {
    let err = compute_check_digits("").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument 'digits' is invalid: must not be empty");
}

#[test]
fn validate_empty_message() {
    let err = validate("").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument 'cpf' is invalid: must not be empty");
}

#[test]
fn null_message() {
    let service = StandardCpfService::with_source(FixedDigitSource::from_digits("0"));
    let err = service.validate(None).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument 'cpf' must not be null");
}

#[test]
fn repeated_digit_sequences() {
    // The scheme assigns valid check digits to every base, repeated ones included.
    for d in 0..=9u8 {
        let base: String = std::iter::repeat_n(char::from(b'0' + d), BASE_LEN).collect();
        let full = compute_check_digits(&base).unwrap();
        assert!(validate(&full).unwrap());
    }
}

#[test]
fn cpf_ordering_follows_digits() {
    let a = Cpf::from_base("000000000").unwrap();
    let b = Cpf::from_base("111444777").unwrap();
    assert!(a < b);
}

#[test]
fn empty_fixed_source_generates_all_zero_cpf() {
    let service = StandardCpfService::with_source(FixedDigitSource::new(Vec::new()));
    assert_eq!(service.generate(), "00000000000");
}
