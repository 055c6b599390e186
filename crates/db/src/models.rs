use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use salonbook_core::models::{appointment::Appointment, schedule::Schedule, service::Service};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration: i32,
    pub price: i32,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub service_id: Uuid,
    pub appointment_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub notes: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub manage_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            name: row.name,
            description: row.description,
            duration: row.duration,
            price: row.price,
            is_active: row.is_active,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

impl From<DbSchedule> for Schedule {
    fn from(row: DbSchedule) -> Self {
        Schedule {
            id: row.id,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            lunch_start: row.lunch_start,
            lunch_end: row.lunch_end,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: row.id,
            service_id: row.service_id,
            appointment_date: row.appointment_date,
            start_time: row.start_time,
            end_time: row.end_time,
            status: row.status,
            notes: row.notes,
            email: row.email,
            phone: row.phone,
            manage_token: row.manage_token,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
