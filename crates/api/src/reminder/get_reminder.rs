use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_reminder::*;
use care_reminders_domain::{Reminder, ID};
use care_reminders_infra::CareContext;

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.into_inner().reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(CareError::from)
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find(&self.reminder_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))
    }
}
