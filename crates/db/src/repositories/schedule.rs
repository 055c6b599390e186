use crate::models::DbSchedule;
use chrono::Utc;
use eyre::{eyre, Result};
use salonbook_core::models::schedule::{CreateScheduleRequest, UpdateScheduleRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule(
    pool: &Pool<Postgres>,
    request: &CreateScheduleRequest,
) -> Result<DbSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating schedule: id={}, day_of_week={}, hours={}-{}",
        id,
        request.day_of_week,
        request.start_time,
        request.end_time
    );

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, day_of_week, start_time, end_time, lunch_start, lunch_end, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, day_of_week, start_time, end_time, lunch_start, lunch_end, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(request.day_of_week)
    .bind(&request.start_time)
    .bind(&request.end_time)
    .bind(&request.lunch_start)
    .bind(&request.lunch_end)
    .bind(request.is_active.unwrap_or(true))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, day_of_week, start_time, end_time, lunch_start, lunch_end, is_active, created_at
        FROM schedules
        ORDER BY day_of_week ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

pub async fn get_schedule_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, day_of_week, start_time, end_time, lunch_start, lunch_end, is_active, created_at
        FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// Returns the active schedule for a weekday (0 = Sunday), if any.
pub async fn get_schedule_by_day(
    pool: &Pool<Postgres>,
    day_of_week: i32,
) -> Result<Option<DbSchedule>> {
    tracing::debug!("Getting schedule for day_of_week={}", day_of_week);

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, day_of_week, start_time, end_time, lunch_start, lunch_end, is_active, created_at
        FROM schedules
        WHERE day_of_week = $1 AND is_active = TRUE
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

pub async fn update_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateScheduleRequest,
) -> Result<DbSchedule> {
    let schedule = get_schedule_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Schedule not found"))?;

    let day_of_week = request.day_of_week.unwrap_or(schedule.day_of_week);
    let start_time = request.start_time.as_deref().unwrap_or(&schedule.start_time);
    let end_time = request.end_time.as_deref().unwrap_or(&schedule.end_time);
    let lunch_start = request.lunch_start.as_deref().or(schedule.lunch_start.as_deref());
    let lunch_end = request.lunch_end.as_deref().or(schedule.lunch_end.as_deref());
    let is_active = request.is_active.unwrap_or(schedule.is_active);

    let updated_schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        UPDATE schedules
        SET day_of_week = $2, start_time = $3, end_time = $4, lunch_start = $5, lunch_end = $6, is_active = $7
        WHERE id = $1
        RETURNING id, day_of_week, start_time, end_time, lunch_start, lunch_end, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .bind(lunch_start)
    .bind(lunch_end)
    .bind(is_active)
    .fetch_one(pool)
    .await?;

    Ok(updated_schedule)
}
