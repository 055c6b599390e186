use eyre::Result;
use salonbook_core::models::{schedule::CreateScheduleRequest, service::CreateServiceRequest};
use sqlx::{Pool, Postgres};
use tracing::info;

use crate::repositories;

/// Populates an empty database with the default service catalog and the
/// standard Monday-Friday working week. Tables that already contain rows are
/// left untouched, so re-running on an existing installation is a no-op.
pub async fn seed_defaults(pool: &Pool<Postgres>) -> Result<()> {
    seed_services(pool).await?;
    seed_schedules(pool).await?;
    Ok(())
}

async fn seed_services(pool: &Pool<Postgres>) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    info!("Seeding default services...");

    let defaults = [
        ("Facial Cleansing", "Deep pore cleansing, comedone removal, hydration and skin nourishment", 90, 3500),
        ("Chemical Peel", "Chemical and mechanical peels for skin renewal and rejuvenation", 60, 3500),
        ("Face Massage", "Anti-aging massage to improve skin tone and elasticity", 45, 2000),
        ("Microcurrent Therapy", "Low-intensity pulsed currents for skin rejuvenation and lymphatic drainage", 45, 3500),
        ("Botox", "Botulinum toxin injections to smooth expression lines", 30, 8000),
        ("Biorevitalization", "Hyaluronic acid injections for deep hydration and rejuvenation", 60, 10000),
    ];

    for (name, description, duration, price) in defaults {
        repositories::service::create_service(
            pool,
            &CreateServiceRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                duration,
                price,
                is_active: Some(true),
                image_url: None,
            },
        )
        .await?;
    }

    Ok(())
}

async fn seed_schedules(pool: &Pool<Postgres>) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedules")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    info!("Seeding default schedules...");

    // Monday through Friday, 10:00-18:00 with a 13:00-14:00 lunch break.
    for day_of_week in 1..=5 {
        repositories::schedule::create_schedule(
            pool,
            &CreateScheduleRequest {
                day_of_week,
                start_time: "10:00".to_string(),
                end_time: "18:00".to_string(),
                lunch_start: Some("13:00".to_string()),
                lunch_end: Some("14:00".to_string()),
                is_active: Some(true),
            },
        )
        .await?;
    }

    Ok(())
}
