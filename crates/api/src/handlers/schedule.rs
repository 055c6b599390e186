use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use salonbook_core::{
    errors::BookingError,
    models::schedule::{CreateScheduleRequest, Schedule, UpdateScheduleRequest},
    slots::{minutes_to_time, time_to_minutes},
};
use uuid::Uuid;

use crate::{middleware::{auth, error_handling::AppError}, ApiState};

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Schedule>>, AppError> {
    let schedules = salonbook_db::repositories::schedule::get_schedules(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(schedules.into_iter().map(Schedule::from).collect()))
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<Schedule>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let times = validate_schedule_times(
        payload.day_of_week,
        &payload.start_time,
        &payload.end_time,
        payload.lunch_start.as_deref(),
        payload.lunch_end.as_deref(),
    )?;

    // Store canonical zero-padded times so string comparisons stay ordered
    let canonical = CreateScheduleRequest {
        day_of_week: payload.day_of_week,
        start_time: times.start_time,
        end_time: times.end_time,
        lunch_start: times.lunch.as_ref().map(|(start, _)| start.clone()),
        lunch_end: times.lunch.as_ref().map(|(_, end)| end.clone()),
        is_active: payload.is_active,
    };

    let db_schedule =
        salonbook_db::repositories::schedule::create_schedule(&state.db_pool, &canonical)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(db_schedule.into()))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<Json<Schedule>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let existing = salonbook_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Schedule with ID {} not found", id)))?;

    // Validate the schedule as it would look after the partial update
    let day_of_week = payload.day_of_week.unwrap_or(existing.day_of_week);
    let start_time = payload.start_time.as_deref().unwrap_or(&existing.start_time);
    let end_time = payload.end_time.as_deref().unwrap_or(&existing.end_time);
    let lunch_start = payload.lunch_start.as_deref().or(existing.lunch_start.as_deref());
    let lunch_end = payload.lunch_end.as_deref().or(existing.lunch_end.as_deref());

    let times = validate_schedule_times(day_of_week, start_time, end_time, lunch_start, lunch_end)?;

    let canonical = UpdateScheduleRequest {
        day_of_week: Some(day_of_week),
        start_time: Some(times.start_time),
        end_time: Some(times.end_time),
        lunch_start: times.lunch.as_ref().map(|(start, _)| start.clone()),
        lunch_end: times.lunch.as_ref().map(|(_, end)| end.clone()),
        is_active: payload.is_active,
    };

    let db_schedule =
        salonbook_db::repositories::schedule::update_schedule(&state.db_pool, id, &canonical)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(db_schedule.into()))
}

/// Canonical "HH:MM" working hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTimes {
    pub start_time: String,
    pub end_time: String,
    pub lunch: Option<(String, String)>,
}

/// Validates working-hours invariants and returns zero-padded times.
///
/// Rules: `day_of_week` in 0..=6, `start < end`, lunch bounds both present
/// or both absent, and `start <= lunch_start < lunch_end <= end`.
pub fn validate_schedule_times(
    day_of_week: i32,
    start_time: &str,
    end_time: &str,
    lunch_start: Option<&str>,
    lunch_end: Option<&str>,
) -> Result<ScheduleTimes, AppError> {
    if !(0..=6).contains(&day_of_week) {
        return Err(AppError(BookingError::Validation(
            "day_of_week must be between 0 (Sunday) and 6 (Saturday)".to_string(),
        )));
    }

    let start = time_to_minutes(start_time)?;
    let end = time_to_minutes(end_time)?;
    if start >= end {
        return Err(AppError(BookingError::Validation(
            "Working hours must start before they end".to_string(),
        )));
    }

    let lunch = match (lunch_start, lunch_end) {
        (None, None) => None,
        (Some(lunch_start), Some(lunch_end)) => {
            let lunch_start = time_to_minutes(lunch_start)?;
            let lunch_end = time_to_minutes(lunch_end)?;
            if !(start <= lunch_start && lunch_start < lunch_end && lunch_end <= end) {
                return Err(AppError(BookingError::Validation(
                    "Lunch break must fall inside working hours".to_string(),
                )));
            }
            Some((minutes_to_time(lunch_start), minutes_to_time(lunch_end)))
        }
        _ => {
            return Err(AppError(BookingError::Validation(
                "lunch_start and lunch_end must be provided together".to_string(),
            )));
        }
    };

    Ok(ScheduleTimes {
        start_time: minutes_to_time(start),
        end_time: minutes_to_time(end),
        lunch,
    })
}
