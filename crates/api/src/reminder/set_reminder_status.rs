use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::set_reminder_status::*;
use care_reminders_domain::{ReminderStatus, ID};
use care_reminders_infra::CareContext;

pub async fn set_reminder_status_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = SetReminderStatusUseCase {
        reminder_id: path_params.reminder_id.clone(),
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Ok().json(APIResponse {
                reminder_id: path_params.reminder_id.clone(),
                status: body.status,
            })
        })
        .map_err(CareError::from)
}

/// Marks a reminder as taken or missed.
///
/// Unless strict status transitions are configured the status is overwritten
/// without looking at the current one.
#[derive(Debug)]
pub struct SetReminderStatusUseCase {
    pub reminder_id: ID,
    pub status: ReminderStatus,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidStatus(ReminderStatus),
    NotFound(ID),
    InvalidTransition {
        from: ReminderStatus,
        to: ReminderStatus,
    },
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidStatus(status) => Self::BadClientData(format!(
                "A reminder can not be set to: {}, only to taken or missed",
                status.as_str()
            )),
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::InvalidTransition { from, to } => Self::Conflict(format!(
                "The reminder is already {} and can not be changed to {}",
                from.as_str(),
                to.as_str()
            )),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetReminderStatusUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "SetReminderStatus";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        if !self.status.is_settable() {
            return Err(UseCaseError::InvalidStatus(self.status));
        }

        if ctx.config.strict_status_transitions {
            let reminder = ctx
                .repos
                .reminders
                .find(&self.reminder_id)
                .await
                .map_err(|e| UseCaseError::StorageError(e.to_string()))?
                .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))?;
            if !reminder.status.can_transition_to(self.status) {
                return Err(UseCaseError::InvalidTransition {
                    from: reminder.status,
                    to: self.status,
                });
            }
        }

        ctx.repos
            .reminders
            .update_status(
                &self.reminder_id,
                self.status,
                ctx.sys.get_timestamp_millis(),
            )
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
