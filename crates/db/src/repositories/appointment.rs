use crate::models::DbAppointment;
use chrono::{NaiveDate, Utc};
use eyre::{eyre, Result};
use salonbook_core::models::appointment::{
    CreateAppointmentRequest, UpdateAppointmentRequest, STATUS_CANCELLED,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    request: &CreateAppointmentRequest,
    status: &str,
    phone: Option<&str>,
    manage_token: Option<&str>,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, service_id={}, date={}, time={}-{}",
        id,
        request.service_id,
        request.appointment_date,
        request.start_time,
        request.end_time
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments
            (id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
        RETURNING id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(request.service_id)
    .bind(request.appointment_date)
    .bind(&request.start_time)
    .bind(&request.end_time)
    .bind(status)
    .bind(&request.notes)
    .bind(&request.email)
    .bind(phone)
    .bind(manage_token)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at
        FROM appointments
        ORDER BY appointment_date ASC, start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointments_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    tracing::debug!("Getting appointments for date={}", date);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at
        FROM appointments
        WHERE appointment_date = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointment_by_manage_token(
    pool: &Pool<Postgres>,
    token: &str,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at
        FROM appointments
        WHERE manage_token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn update_appointment(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateAppointmentRequest,
) -> Result<DbAppointment> {
    let appointment = get_appointment_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Appointment not found"))?;

    apply_update(pool, &appointment, request).await
}

pub async fn update_appointment_by_manage_token(
    pool: &Pool<Postgres>,
    token: &str,
    request: &UpdateAppointmentRequest,
) -> Result<DbAppointment> {
    let appointment = get_appointment_by_manage_token(pool, token)
        .await?
        .ok_or_else(|| eyre!("Appointment not found"))?;

    apply_update(pool, &appointment, request).await
}

pub async fn cancel_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Cancelling appointment: id={}", id);

    sqlx::query(
        r#"
        UPDATE appointments
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(STATUS_CANCELLED)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn cancel_appointment_by_manage_token(pool: &Pool<Postgres>, token: &str) -> Result<()> {
    let appointment = get_appointment_by_manage_token(pool, token)
        .await?
        .ok_or_else(|| eyre!("Appointment not found"))?;

    cancel_appointment(pool, appointment.id).await
}

async fn apply_update(
    pool: &Pool<Postgres>,
    appointment: &DbAppointment,
    request: &UpdateAppointmentRequest,
) -> Result<DbAppointment> {
    let appointment_date = request
        .appointment_date
        .unwrap_or(appointment.appointment_date);
    let start_time = request.start_time.as_deref().unwrap_or(&appointment.start_time);
    let end_time = request.end_time.as_deref().unwrap_or(&appointment.end_time);
    let notes = request.notes.as_deref().or(appointment.notes.as_deref());
    let status = request.status.as_deref().unwrap_or(&appointment.status);

    let updated_appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET appointment_date = $2, start_time = $3, end_time = $4, notes = $5, status = $6, updated_at = NOW()
        WHERE id = $1
        RETURNING id, service_id, appointment_date, start_time, end_time, status, notes, email, phone, manage_token, created_at, updated_at
        "#,
    )
    .bind(appointment.id)
    .bind(appointment_date)
    .bind(start_time)
    .bind(end_time)
    .bind(notes)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(updated_appointment)
}
