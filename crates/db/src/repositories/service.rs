use crate::models::DbService;
use chrono::Utc;
use eyre::{eyre, Result};
use salonbook_core::models::service::{CreateServiceRequest, UpdateServiceRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    request: &CreateServiceRequest,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating service: id={}, name={}, duration={}",
        id,
        request.name,
        request.duration
    );

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, name, description, duration, price, is_active, image_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, description, duration, price, is_active, image_url, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.duration)
    .bind(request.price)
    .bind(request.is_active.unwrap_or(true))
    .bind(&request.image_url)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_services(pool: &Pool<Postgres>) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, duration, price, is_active, image_url, created_at
        FROM services
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn get_active_services(pool: &Pool<Postgres>) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, duration, price, is_active, image_url, created_at
        FROM services
        WHERE is_active = TRUE
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    tracing::debug!("Getting service by id: {}", id);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, duration, price, is_active, image_url, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateServiceRequest,
) -> Result<DbService> {
    let service = get_service_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Service not found"))?;

    let name = request.name.as_deref().unwrap_or(&service.name);
    let description = request.description.as_deref().or(service.description.as_deref());
    let duration = request.duration.unwrap_or(service.duration);
    let price = request.price.unwrap_or(service.price);
    let is_active = request.is_active.unwrap_or(service.is_active);
    let image_url = request.image_url.as_deref().or(service.image_url.as_deref());

    let updated_service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = $2, description = $3, duration = $4, price = $5, is_active = $6, image_url = $7
        WHERE id = $1
        RETURNING id, name, description, duration, price, is_active, image_url, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(duration)
    .bind(price)
    .bind(is_active)
    .bind(image_url)
    .fetch_one(pool)
    .await?;

    Ok(updated_service)
}
