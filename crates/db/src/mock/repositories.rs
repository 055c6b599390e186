use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbSchedule, DbService};
use salonbook_core::models::{
    appointment::{CreateAppointmentRequest, UpdateAppointmentRequest},
    schedule::{CreateScheduleRequest, UpdateScheduleRequest},
    service::{CreateServiceRequest, UpdateServiceRequest},
};

// Mock repositories for testing
mock! {
    pub ServiceRepo {
        pub async fn create_service(
            &self,
            request: CreateServiceRequest,
        ) -> eyre::Result<DbService>;

        pub async fn get_services(&self) -> eyre::Result<Vec<DbService>>;

        pub async fn get_active_services(&self) -> eyre::Result<Vec<DbService>>;

        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn update_service(
            &self,
            id: Uuid,
            request: UpdateServiceRequest,
        ) -> eyre::Result<DbService>;
    }
}

mock! {
    pub ScheduleRepo {
        pub async fn create_schedule(
            &self,
            request: CreateScheduleRequest,
        ) -> eyre::Result<DbSchedule>;

        pub async fn get_schedules(&self) -> eyre::Result<Vec<DbSchedule>>;

        pub async fn get_schedule_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn get_schedule_by_day(
            &self,
            day_of_week: i32,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn update_schedule(
            &self,
            id: Uuid,
            request: UpdateScheduleRequest,
        ) -> eyre::Result<DbSchedule>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            request: CreateAppointmentRequest,
            status: String,
            phone: Option<String>,
            manage_token: Option<String>,
        ) -> eyre::Result<DbAppointment>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn get_appointments(&self) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointments_by_date(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointment_by_manage_token(
            &self,
            token: String,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn update_appointment(
            &self,
            id: Uuid,
            request: UpdateAppointmentRequest,
        ) -> eyre::Result<DbAppointment>;

        pub async fn update_appointment_by_manage_token(
            &self,
            token: String,
            request: UpdateAppointmentRequest,
        ) -> eyre::Result<DbAppointment>;

        pub async fn cancel_appointment(&self, id: Uuid) -> eyre::Result<()>;

        pub async fn cancel_appointment_by_manage_token(
            &self,
            token: String,
        ) -> eyre::Result<()>;
    }
}
