use pretty_assertions::assert_eq;
use rstest::rstest;

use salonbook_api::handlers::appointment::{
    generate_manage_token, normalize_phone, validate_status, validate_time_range,
};
use salonbook_core::errors::BookingError;

#[rstest]
#[case("+7 (916) 123-45-67", "79161234567")]
#[case("8 916 123 45 67", "79161234567")]
#[case("89161234567", "79161234567")]
#[case("79161234567", "79161234567")]
#[case("12345", "12345")]
// An 8 prefix only gets rewritten for full 11-digit domestic numbers.
#[case("8123", "8123")]
fn test_normalize_phone(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_phone(input), expected);
}

#[test]
fn test_manage_tokens_are_random_alphanumeric_secrets() {
    let first = generate_manage_token();
    let second = generate_manage_token();

    assert_eq!(first.len(), 32);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second);
}

#[rstest]
#[case("scheduled")]
#[case("cancelled")]
#[case("completed")]
fn test_valid_statuses_are_accepted(#[case] status: &str) {
    assert!(validate_status(status).is_ok());
}

#[rstest]
#[case("done")]
#[case("SCHEDULED")]
#[case("")]
fn test_unknown_statuses_are_rejected(#[case] status: &str) {
    let result = validate_status(status);
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}

#[test]
fn test_time_range_is_canonicalized() {
    let (start, end) = validate_time_range("9:30", "11:00").unwrap();
    assert_eq!(start, "09:30");
    assert_eq!(end, "11:00");
}

#[rstest]
#[case("12:00", "11:00")]
#[case("12:00", "12:00")]
#[case("noon", "13:00")]
fn test_invalid_time_ranges_are_rejected(#[case] start: &str, #[case] end: &str) {
    let result = validate_time_range(start, end);
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}
