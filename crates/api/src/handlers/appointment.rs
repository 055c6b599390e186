use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::NaiveDate;
use rand::{distributions::Alphanumeric, Rng};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use salonbook_core::{
    errors::BookingError,
    models::appointment::{
        Appointment, CreateAppointmentRequest, UpdateAppointmentRequest, STATUS_SCHEDULED,
        VALID_STATUSES,
    },
    slots::{minutes_to_time, time_to_minutes},
};
use uuid::Uuid;

use crate::{middleware::{auth, error_handling::AppError}, notify::WhatsAppClient, ApiState};

/// Length of the secret issued to anonymous clients for self-management.
const MANAGE_TOKEN_LENGTH: usize = 32;

/// Query parameters for the appointment list endpoint
#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    /// Restrict the listing to one calendar day
    pub date: Option<NaiveDate>,
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let appointments = match query.date {
        Some(date) => {
            salonbook_db::repositories::appointment::get_appointments_by_date(&state.db_pool, date)
                .await
                .map_err(BookingError::Database)?
        }
        None => salonbook_db::repositories::appointment::get_appointments(&state.db_pool)
            .await
            .map_err(BookingError::Database)?,
    };

    Ok(Json(appointments.into_iter().map(Appointment::from).collect()))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let is_admin = auth::is_admin(&state.config, &headers);

    let (start_time, end_time) = validate_time_range(&payload.start_time, &payload.end_time)?;
    let status = payload.status.clone().unwrap_or_else(|| STATUS_SCHEDULED.to_string());
    validate_status(&status)?;

    // The referenced service must exist before anything is written
    salonbook_db::repositories::service::get_service_by_id(&state.db_pool, payload.service_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Service with ID {} not found", payload.service_id))
        })?;

    let phone = payload.phone.as_deref().map(normalize_phone);
    if !is_admin && phone.is_none() {
        return Err(AppError(BookingError::Validation(
            "Phone is required for anonymous booking".to_string(),
        )));
    }

    // Anonymous clients manage their booking through a secret link
    let manage_token = if is_admin { None } else { Some(generate_manage_token()) };

    let canonical = CreateAppointmentRequest {
        start_time,
        end_time,
        ..payload
    };

    let db_appointment = salonbook_db::repositories::appointment::create_appointment(
        &state.db_pool,
        &canonical,
        &status,
        phone.as_deref(),
        manage_token.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    let appointment = Appointment::from(db_appointment);

    // Best-effort WhatsApp confirmation with the manage link
    if let (Some(client), Some(phone), Some(token)) = (
        WhatsAppClient::from_config(&state.config),
        appointment.phone.as_deref(),
        appointment.manage_token.as_deref(),
    ) {
        let link = format!("{}/manage/{}", state.config.public_base_url, token);
        let text = format!("Your appointment has been created. Manage it here: {link}");
        if let Err(error) = client.send_text(phone, &text).await {
            tracing::warn!("Failed to send WhatsApp message: {error}");
        }
    }

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn get_appointment_by_token(
    State(state): State<Arc<ApiState>>,
    Path(token): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let db_appointment = salonbook_db::repositories::appointment::get_appointment_by_manage_token(
        &state.db_pool,
        &token,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound("Appointment not found".to_string()))?;

    Ok(Json(db_appointment.into()))
}

#[axum::debug_handler]
pub async fn update_appointment_by_token(
    State(state): State<Arc<ApiState>>,
    Path(token): Path<String>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let existing = salonbook_db::repositories::appointment::get_appointment_by_manage_token(
        &state.db_pool,
        &token,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound("Appointment not found".to_string()))?;

    let canonical = validate_update(&payload, &existing.start_time, &existing.end_time)?;

    let db_appointment =
        salonbook_db::repositories::appointment::update_appointment_by_manage_token(
            &state.db_pool,
            &token,
            &canonical,
        )
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(db_appointment.into()))
}

#[axum::debug_handler]
pub async fn cancel_appointment_by_token(
    State(state): State<Arc<ApiState>>,
    Path(token): Path<String>,
) -> Result<Json<Value>, AppError> {
    salonbook_db::repositories::appointment::get_appointment_by_manage_token(&state.db_pool, &token)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound("Appointment not found".to_string()))?;

    salonbook_db::repositories::appointment::cancel_appointment_by_manage_token(
        &state.db_pool,
        &token,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(json!({ "message": "Appointment cancelled" })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let existing = salonbook_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    let canonical = validate_update(&payload, &existing.start_time, &existing.end_time)?;

    let db_appointment = salonbook_db::repositories::appointment::update_appointment(
        &state.db_pool,
        id,
        &canonical,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(db_appointment.into()))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    salonbook_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    salonbook_db::repositories::appointment::cancel_appointment(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(json!({ "message": "Appointment cancelled" })))
}

/// Reduces a phone number to bare digits; an 11-digit number with the
/// Russian domestic `8` prefix is rewritten to the international `7` form.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with('8') {
        format!("7{}", &digits[1..])
    } else {
        digits
    }
}

/// Random alphanumeric capability for anonymous appointment management.
pub fn generate_manage_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(MANAGE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

pub fn validate_status(status: &str) -> Result<(), AppError> {
    if !VALID_STATUSES.contains(&status) {
        return Err(AppError(BookingError::Validation(format!(
            "Invalid appointment status: {status}"
        ))));
    }
    Ok(())
}

/// Parses a start/end pair and returns them in canonical zero-padded form.
pub fn validate_time_range(start_time: &str, end_time: &str) -> Result<(String, String), AppError> {
    let start = time_to_minutes(start_time)?;
    let end = time_to_minutes(end_time)?;
    if start >= end {
        return Err(AppError(BookingError::Validation(
            "Appointment must start before it ends".to_string(),
        )));
    }
    Ok((minutes_to_time(start), minutes_to_time(end)))
}

/// Validates a partial update against the stored appointment and returns a
/// request with canonical times.
fn validate_update(
    payload: &UpdateAppointmentRequest,
    existing_start: &str,
    existing_end: &str,
) -> Result<UpdateAppointmentRequest, AppError> {
    if let Some(status) = payload.status.as_deref() {
        validate_status(status)?;
    }

    let mut canonical = payload.clone();
    if payload.start_time.is_some() || payload.end_time.is_some() {
        let start = payload.start_time.as_deref().unwrap_or(existing_start);
        let end = payload.end_time.as_deref().unwrap_or(existing_end);
        let (start, end) = validate_time_range(start, end)?;
        canonical.start_time = Some(start);
        canonical.end_time = Some(end);
    }

    Ok(canonical)
}
