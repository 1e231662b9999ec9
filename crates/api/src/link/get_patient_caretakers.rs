use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_patient_caretakers::*;
use care_reminders_domain::{User, ID};
use care_reminders_infra::CareContext;

pub async fn get_patient_caretakers_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetPatientCaretakersUseCase {
        patient_id: path_params.into_inner().patient_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|users| HttpResponse::Ok().json(APIResponse::new(users)))
        .map_err(CareError::from)
}

/// The caretakers linked to the patient
#[derive(Debug)]
pub struct GetPatientCaretakersUseCase {
    pub patient_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPatientCaretakersUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPatientCaretakers";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let caretaker_ids = ctx
            .repos
            .links
            .find_caretaker_ids_by_patient(&self.patient_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        if caretaker_ids.is_empty() {
            return Ok(Vec::new());
        }

        ctx.repos
            .users
            .find_many(&caretaker_ids)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
