use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_patient_reminders::*;
use care_reminders_domain::{sort_by_reminder_time, Reminder, ID};
use care_reminders_infra::CareContext;

pub async fn get_patient_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetPatientRemindersUseCase {
        patient_id: path_params.into_inner().patient_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(CareError::from)
}

/// The reminders of a patient, soonest first
#[derive(Debug)]
pub struct GetPatientRemindersUseCase {
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
impl UseCase for GetPatientRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPatientReminders";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let mut reminders = ctx
            .repos
            .reminders
            .find_by_patient(&self.patient_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        sort_by_reminder_time(&mut reminders);

        Ok(reminders)
    }
}
