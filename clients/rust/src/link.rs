use crate::{APIResponse, BaseClient};
use care_reminders_api_structs::*;
use care_reminders_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct LinkClient {
    base: Arc<BaseClient>,
}

pub struct LinkInput {
    pub caretaker_id: ID,
    pub patient_id: ID,
}

impl LinkClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn link(&self, input: LinkInput) -> APIResponse<link_caretaker::APIResponse> {
        let body = link_caretaker::RequestBody {
            caretaker_id: input.caretaker_id,
            patient_id: input.patient_id,
        };
        self.base
            .post(body, "links".into(), StatusCode::CREATED)
            .await
    }

    pub async fn unlink(&self, input: LinkInput) -> APIResponse<unlink_caretaker::APIResponse> {
        self.base
            .delete(
                format!("links/{}/{}", input.caretaker_id, input.patient_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_patients(
        &self,
        caretaker_id: ID,
    ) -> APIResponse<get_caretaker_patients::APIResponse> {
        self.base
            .get(
                format!("caretakers/{}/patients", caretaker_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_caretakers(
        &self,
        patient_id: ID,
    ) -> APIResponse<get_patient_caretakers::APIResponse> {
        self.base
            .get(
                format!("patients/{}/caretakers", patient_id),
                StatusCode::OK,
            )
            .await
    }
}
