use crate::shared::usecase::UseCase;
use care_reminders_domain::ScheduledNotification;
use care_reminders_infra::CareContext;
use tracing::error;

/// Takes every scheduled notification that is due out of the queue and
/// hands it to the notification sender. Notifications that fail to send
/// are dropped.
#[derive(Debug)]
pub struct DispatchDueNotificationsUseCase {}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchDueNotificationsUseCase {
    /// The notifications that were taken out of the queue
    type Response = Vec<ScheduledNotification>;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchDueNotifications";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let due = ctx
            .repos
            .scheduled_notifications
            .delete_all_before(now)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        for notification in &due {
            if let Err(e) = ctx.notification_sender.send(notification).await {
                error!(
                    "Unable to send notification {} for reminder {}: {:?}",
                    notification.id, notification.request.payload.reminder_id, e
                );
            }
        }

        Ok(due)
    }
}
