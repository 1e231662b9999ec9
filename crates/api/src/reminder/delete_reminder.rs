use super::subscribers::CancelNotificationsOnReminderDeleted;
use crate::error::CareError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::delete_reminder::*;
use care_reminders_domain::{Reminder, ID};
use care_reminders_infra::CareContext;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let reminder_id = path_params.into_inner().reminder_id;
    let usecase = DeleteReminderUseCase {
        reminder_id: reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted| {
            HttpResponse::Ok().json(APIResponse {
                reminder_id,
                deleted: deleted.is_some(),
            })
        })
        .map_err(CareError::from)
}

/// Deletes the reminder. Deleting a reminder that does not exist succeeds.
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
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
impl UseCase for DeleteReminderUseCase {
    /// The deleted reminder, if there was one
    type Response = Option<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .delete(&self.reminder_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelNotificationsOnReminderDeleted)]
    }
}
