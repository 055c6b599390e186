//! # Availability Handler
//!
//! Computes the bookable start times for one calendar day. The handler owns
//! the caller-side half of the availability contract; the arithmetic lives
//! in `salonbook_core::slots`.
//!
//! The split of responsibilities:
//!
//! 1. Resolve the weekday's schedule. A day without an active schedule is
//!    simply closed — the response is an empty list, not an error, and the
//!    generator is never invoked.
//! 2. Resolve the requested service. An unknown or deactivated service is a
//!    client error.
//! 3. Load the day's appointments and keep only those with status
//!    `scheduled`; cancelled and completed appointments must not block
//!    slots, and that filtering happens here, never in the generator.
//! 4. Convert everything to minutes since midnight and hand it to the slot
//!    generator, which is total over the remaining inputs.
//!
//! Availability is computed against a read snapshot: a concurrent booking
//! may invalidate a returned slot, which the commit path tolerates rather
//! than this handler preventing.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;
use salonbook_core::{
    errors::BookingError,
    models::appointment::STATUS_SCHEDULED,
    slots::{generate_slots, time_to_minutes, BookedInterval, WorkingHours},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the available-slots endpoint
///
/// # Fields
///
/// * `date` - Calendar day to check, as `YYYY-MM-DD`
/// * `service_id` - Service whose duration determines the slot length
#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    /// Calendar day to check
    pub date: NaiveDate,

    /// Requested service
    pub service_id: Uuid,
}

/// Returns the ordered list of bookable "HH:MM" start times
///
/// # Endpoint
///
/// ```text
/// GET /api/available-slots?date=2025-03-17&service_id=<uuid>
/// ```
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    // 0 = Sunday, matching the schedules table
    let day_of_week = query.date.weekday().num_days_from_sunday() as i32;

    // No active schedule for this weekday means the salon is closed
    let Some(schedule) =
        salonbook_db::repositories::schedule::get_schedule_by_day(&state.db_pool, day_of_week)
            .await
            .map_err(BookingError::Database)?
    else {
        return Ok(Json(Vec::new()));
    };

    // The requested service must exist and be bookable
    let service =
        salonbook_db::repositories::service::get_service_by_id(&state.db_pool, query.service_id)
            .await
            .map_err(BookingError::Database)?
            .filter(|service| service.is_active)
            .ok_or_else(|| BookingError::Validation("Service not found".to_string()))?;

    if service.duration < 1 {
        return Err(AppError(BookingError::Validation(
            "Service duration must be positive".to_string(),
        )));
    }

    let appointments = salonbook_db::repositories::appointment::get_appointments_by_date(
        &state.db_pool,
        query.date,
    )
    .await
    .map_err(BookingError::Database)?;

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

    // Only scheduled appointments occupy time on the calendar
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

    let slots = generate_slots(&hours, &booked, service.duration as u32);

    Ok(Json(slots))
}
