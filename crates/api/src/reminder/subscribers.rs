use super::{
    create_reminder::CreateReminderUseCase, delete_reminder::DeleteReminderUseCase,
    schedule_reminder_notifications::schedule_reminder_notifications,
};
use crate::shared::usecase::Subscriber;
use care_reminders_domain::Reminder;
use care_reminders_infra::CareContext;
use tracing::{error, info};

pub struct ScheduleNotificationsOnReminderCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for ScheduleNotificationsOnReminderCreated {
    async fn notify(&self, e: &Reminder, ctx: &CareContext) {
        // Sideeffect, the reminder is stored no matter how this goes
        match schedule_reminder_notifications(e, ctx).await {
            Ok(ids) => info!(
                "Scheduled {} notifications for reminder {}",
                ids.len(),
                e.id
            ),
            Err(err) => error!(
                "Error scheduling notifications for reminder {}: {}",
                e.id, err
            ),
        }
    }
}

pub struct CancelNotificationsOnReminderDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteReminderUseCase> for CancelNotificationsOnReminderDeleted {
    async fn notify(&self, e: &Option<Reminder>, ctx: &CareContext) {
        if !ctx.config.cancel_notifications_on_delete {
            return;
        }
        let reminder = match e {
            Some(reminder) => reminder,
            None => return,
        };

        for notification_id in &reminder.notification_ids {
            if let Err(err) = ctx.notifications.cancel(notification_id).await {
                error!(
                    "Error cancelling notification {} of deleted reminder {}: {}",
                    notification_id, reminder.id, err
                );
            }
        }
    }
}
