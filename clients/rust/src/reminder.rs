use crate::{APIResponse, BaseClient};
use care_reminders_api_structs::*;
use care_reminders_domain::{ReminderStatus, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub patient_id: ID,
    pub patient_name: Option<String>,
    pub title: String,
    pub description: String,
    pub reminder_time: i64,
}

pub struct SetReminderStatusInput {
    pub reminder_id: ID,
    pub status: ReminderStatus,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            patient_id: input.patient_id,
            patient_name: input.patient_name,
            title: input.title,
            description: input.description,
            reminder_time: input.reminder_time,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn set_status(
        &self,
        input: SetReminderStatusInput,
    ) -> APIResponse<set_reminder_status::APIResponse> {
        let body = set_reminder_status::RequestBody {
            status: input.status,
        };
        self.base
            .put(
                body,
                format!("reminders/{}/status", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_all_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get_by_patient(
        &self,
        patient_id: ID,
    ) -> APIResponse<get_patient_reminders::APIResponse> {
        self.base
            .get(
                format!("patients/{}/reminders", patient_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_by_caretaker(
        &self,
        caretaker_id: ID,
    ) -> APIResponse<get_caretaker_reminders::APIResponse> {
        self.base
            .get(
                format!("caretakers/{}/reminders", caretaker_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn stats(&self, patient_id: ID) -> APIResponse<get_reminder_stats::APIResponse> {
        self.base
            .get(
                format!("patients/{}/reminders/stats", patient_id),
                StatusCode::OK,
            )
            .await
    }
}
