use super::subscribers::ScheduleNotificationsOnReminderCreated;
use crate::error::CareError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::create_reminder::*;
use care_reminders_domain::{Reminder, ID};
use care_reminders_infra::CareContext;
use tracing::warn;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let body = body.0;
    if body.reminder_time <= ctx.sys.get_timestamp_millis() {
        return Err(CareError::BadClientData(
            "The reminder time must be in the future".into(),
        ));
    }

    let usecase = CreateReminderUseCase {
        patient_id: body.patient_id,
        patient_name: body.patient_name.unwrap_or_default(),
        title: body.title,
        description: body.description,
        reminder_time: body.reminder_time,
    };

    let reminder = execute(usecase, &ctx).await.map_err(CareError::from)?;
    let reminder = with_scheduled_notifications(reminder, &ctx).await;
    Ok(HttpResponse::Created().json(APIResponse::new(reminder)))
}

/// The subscribers record the scheduled notification ids on the stored
/// reminder after it was created, so the stored version is the one to respond with.
async fn with_scheduled_notifications(reminder: Reminder, ctx: &CareContext) -> Reminder {
    match ctx.repos.reminders.find(&reminder.id).await {
        Ok(Some(stored)) => stored,
        Ok(None) => reminder,
        Err(e) => {
            warn!(
                "Unable to read back the notification ids of reminder {}: {:?}",
                reminder.id, e
            );
            reminder
        }
    }
}

/// Persists a new pending `Reminder`. Notifications are scheduled by
/// the subscribers once the reminder is stored.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub patient_id: ID,
    pub patient_name: String,
    pub title: String,
    pub description: String,
    pub reminder_time: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidTitle,
    InvalidDescription,
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTitle => {
                Self::BadClientData("The reminder title must not be empty".into())
            }
            UseCaseError::InvalidDescription => {
                Self::BadClientData("The reminder description must not be empty".into())
            }
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        if self.title.trim().is_empty() {
            return Err(UseCaseError::InvalidTitle);
        }
        if self.description.trim().is_empty() {
            return Err(UseCaseError::InvalidDescription);
        }

        let reminder = Reminder::new(
            self.patient_id.clone(),
            self.patient_name.clone(),
            self.title.clone(),
            self.description.clone(),
            self.reminder_time,
            ctx.sys.get_timestamp_millis(),
        );

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleNotificationsOnReminderCreated)]
    }
}
