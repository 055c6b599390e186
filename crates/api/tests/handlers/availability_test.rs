use chrono::{Datelike, NaiveDate};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use salonbook_api::middleware::error_handling::AppError;
use salonbook_core::{
    errors::BookingError,
    models::appointment::{STATUS_CANCELLED, STATUS_COMPLETED, STATUS_SCHEDULED},
    slots::{generate_slots, time_to_minutes, BookedInterval, WorkingHours},
};

use crate::test_utils::{sample_appointment, sample_schedule, sample_service, TestContext};

// Replicates the availability handler's caller-side contract against the
// mock repositories: schedule lookup, service validation, status filtering,
// and finally the pure slot generator.
async fn available_slots_wrapper(
    ctx: &TestContext,
    date: NaiveDate,
    service_id: Uuid,
) -> Result<Vec<String>, AppError> {
    let day_of_week = date.weekday().num_days_from_sunday() as i32;

    let Some(schedule) = ctx.schedule_repo.get_schedule_by_day(day_of_week).await? else {
        return Ok(Vec::new());
    };

    let service = ctx
        .service_repo
        .get_service_by_id(service_id)
        .await?
        .filter(|service| service.is_active)
        .ok_or_else(|| AppError(BookingError::Validation("Service not found".to_string())))?;

    let appointments = ctx.appointment_repo.get_appointments_by_date(date).await?;

    let hours = WorkingHours {
        start: time_to_minutes(&schedule.start_time)?,
        end: time_to_minutes(&schedule.end_time)?,
        lunch: match (&schedule.lunch_start, &schedule.lunch_end) {
            (Some(lunch_start), Some(lunch_end)) => {
                Some((time_to_minutes(lunch_start)?, time_to_minutes(lunch_end)?))
            }
            _ => None,
        },
    };

    let booked = appointments
        .iter()
        .filter(|appointment| appointment.status == STATUS_SCHEDULED)
        .map(|appointment| {
            Ok(BookedInterval {
                start: time_to_minutes(&appointment.start_time)?,
                end: time_to_minutes(&appointment.end_time)?,
            })
        })
        .collect::<Result<Vec<_>, BookingError>>()?;

    Ok(generate_slots(&hours, &booked, service.duration as u32))
}

// 2025-03-17 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
}

#[tokio::test]
async fn test_day_without_schedule_is_closed() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_get_schedule_by_day()
        .returning(|_| Ok(None));
    // Neither the service nor the appointments are consulted for a closed day.
    ctx.service_repo.expect_get_service_by_id().never();
    ctx.appointment_repo.expect_get_appointments_by_date().never();

    let slots = available_slots_wrapper(&ctx, monday(), Uuid::new_v4())
        .await
        .unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_unknown_service_is_a_client_error() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_get_schedule_by_day()
        .returning(|_| Ok(Some(sample_schedule(1, "10:00", "18:00", None))));
    ctx.service_repo
        .expect_get_service_by_id()
        .returning(|_| Ok(None));

    let result = available_slots_wrapper(&ctx, monday(), Uuid::new_v4()).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_deactivated_service_is_a_client_error() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_get_schedule_by_day()
        .returning(|_| Ok(Some(sample_schedule(1, "10:00", "18:00", None))));
    ctx.service_repo
        .expect_get_service_by_id()
        .returning(|_| Ok(Some(sample_service(60, false))));

    let result = available_slots_wrapper(&ctx, monday(), Uuid::new_v4()).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_scheduled_appointment_blocks_slots() {
    let mut ctx = TestContext::new();

    // 2025-03-17 is a Monday, so the lookup must ask for day 1.
    ctx.schedule_repo
        .expect_get_schedule_by_day()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(sample_schedule(1, "10:00", "18:00", None))));
    ctx.service_repo
        .expect_get_service_by_id()
        .returning(|_| Ok(Some(sample_service(60, true))));
    ctx.appointment_repo
        .expect_get_appointments_by_date()
        .returning(|date| {
            Ok(vec![sample_appointment(date, "11:00", "12:00", STATUS_SCHEDULED)])
        });

    let slots = available_slots_wrapper(&ctx, monday(), Uuid::new_v4())
        .await
        .unwrap();

    // Single earliest-fit slot before the booking, then the half-hour grid
    // resumes at its end.
    assert_eq!(slots.first().map(String::as_str), Some("10:00"));
    assert!(!slots.contains(&"10:30".to_string()));
    assert!(!slots.contains(&"11:00".to_string()));
    assert!(!slots.contains(&"11:30".to_string()));
    assert_eq!(slots[1], "12:00");
}

#[tokio::test]
async fn test_cancelled_and_completed_appointments_do_not_block_slots() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_get_schedule_by_day()
        .returning(|_| Ok(Some(sample_schedule(1, "10:00", "18:00", None))));
    ctx.service_repo
        .expect_get_service_by_id()
        .returning(|_| Ok(Some(sample_service(60, true))));
    ctx.appointment_repo
        .expect_get_appointments_by_date()
        .returning(|date| {
            Ok(vec![
                sample_appointment(date, "11:00", "12:00", STATUS_CANCELLED),
                sample_appointment(date, "14:00", "15:00", STATUS_COMPLETED),
            ])
        });

    let slots = available_slots_wrapper(&ctx, monday(), Uuid::new_v4())
        .await
        .unwrap();

    // With every appointment filtered out, the day reduces to the plain
    // half-hour grid of an open day.
    let expected = generate_slots(
        &WorkingHours { start: 600, end: 1080, lunch: None },
        &[],
        60,
    );
    assert_eq!(slots, expected);
    assert!(slots.contains(&"11:00".to_string()));
    assert!(slots.contains(&"14:30".to_string()));
}

#[tokio::test]
async fn test_lunch_break_excluded_from_offered_slots() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_get_schedule_by_day()
        .returning(|_| {
            Ok(Some(sample_schedule(1, "10:00", "18:00", Some(("13:00", "14:00")))))
        });
    ctx.service_repo
        .expect_get_service_by_id()
        .returning(|_| Ok(Some(sample_service(60, true))));
    ctx.appointment_repo
        .expect_get_appointments_by_date()
        .returning(|_| Ok(Vec::new()));

    let slots = available_slots_wrapper(&ctx, monday(), Uuid::new_v4())
        .await
        .unwrap();

    assert!(slots.contains(&"12:00".to_string()));
    assert!(!slots.contains(&"12:30".to_string()));
    assert!(!slots.contains(&"13:00".to_string()));
    assert!(slots.contains(&"14:00".to_string()));
}
