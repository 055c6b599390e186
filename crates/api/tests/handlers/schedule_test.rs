use pretty_assertions::assert_eq;
use rstest::rstest;

use salonbook_api::handlers::schedule::validate_schedule_times;
use salonbook_core::errors::BookingError;

#[test]
fn test_valid_schedule_with_lunch() {
    let times = validate_schedule_times(1, "10:00", "18:00", Some("13:00"), Some("14:00")).unwrap();

    assert_eq!(times.start_time, "10:00");
    assert_eq!(times.end_time, "18:00");
    assert_eq!(
        times.lunch,
        Some(("13:00".to_string(), "14:00".to_string()))
    );
}

#[test]
fn test_times_are_canonicalized_to_zero_padded_form() {
    let times = validate_schedule_times(1, "9:00", "18:5", None, None).unwrap();

    assert_eq!(times.start_time, "09:00");
    assert_eq!(times.end_time, "18:05");
    assert_eq!(times.lunch, None);
}

#[test]
fn test_lunch_may_touch_window_edges() {
    // start == lunch_start and lunch_end == end are allowed by the invariant.
    let times = validate_schedule_times(3, "10:00", "18:00", Some("10:00"), Some("11:00")).unwrap();
    assert_eq!(times.lunch, Some(("10:00".to_string(), "11:00".to_string())));

    let times = validate_schedule_times(3, "10:00", "18:00", Some("17:00"), Some("18:00")).unwrap();
    assert_eq!(times.lunch, Some(("17:00".to_string(), "18:00".to_string())));
}

#[rstest]
#[case(-1)]
#[case(7)]
fn test_day_of_week_out_of_range(#[case] day_of_week: i32) {
    let result = validate_schedule_times(day_of_week, "10:00", "18:00", None, None);
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}

#[rstest]
#[case("18:00", "10:00")]
#[case("10:00", "10:00")]
fn test_working_hours_must_be_a_nonempty_range(#[case] start: &str, #[case] end: &str) {
    let result = validate_schedule_times(1, start, end, None, None);
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}

#[rstest]
#[case(Some("13:00"), None)]
#[case(None, Some("14:00"))]
fn test_lunch_bounds_must_be_provided_together(
    #[case] lunch_start: Option<&str>,
    #[case] lunch_end: Option<&str>,
) {
    let result = validate_schedule_times(1, "10:00", "18:00", lunch_start, lunch_end);
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}

#[rstest]
#[case("09:00", "10:30")] // starts before opening
#[case("17:30", "19:00")] // ends after closing
#[case("14:00", "13:00")] // inverted
#[case("13:00", "13:00")] // empty
fn test_lunch_must_fall_inside_working_hours(#[case] lunch_start: &str, #[case] lunch_end: &str) {
    let result = validate_schedule_times(1, "10:00", "18:00", Some(lunch_start), Some(lunch_end));
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}

#[test]
fn test_malformed_time_is_rejected() {
    let result = validate_schedule_times(1, "ten o'clock", "18:00", None, None);
    assert!(matches!(result.unwrap_err().0, BookingError::Validation(_)));
}
