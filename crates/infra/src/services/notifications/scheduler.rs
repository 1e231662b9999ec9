use crate::repos::IScheduledNotificationRepo;
use care_reminders_domain::{NotificationRequest, ScheduledNotification, ID};
use std::sync::Arc;
use tracing::{debug, info};

/// Schedules notifications for delivery at their trigger time
#[async_trait::async_trait]
pub trait INotificationScheduler: Send + Sync {
    /// Returns the id of the scheduled notification, or `None` when
    /// scheduling is not supported in the current environment
    async fn schedule(&self, request: &NotificationRequest) -> anyhow::Result<Option<String>>;
    async fn cancel(&self, notification_id: &str) -> anyhow::Result<()>;
    async fn cancel_all(&self) -> anyhow::Result<()>;
}

/// Stores the notifications in a queue which the dispatch job
/// delivers from
pub struct StoredNotificationScheduler {
    notifications: Arc<dyn IScheduledNotificationRepo>,
}

impl StoredNotificationScheduler {
    pub fn new(notifications: Arc<dyn IScheduledNotificationRepo>) -> Self {
        Self { notifications }
    }
}

#[async_trait::async_trait]
impl INotificationScheduler for StoredNotificationScheduler {
    async fn schedule(&self, request: &NotificationRequest) -> anyhow::Result<Option<String>> {
        let notification = ScheduledNotification::new(request.clone());
        self.notifications.insert(&notification).await?;
        debug!(
            "Scheduled notification {} for {} at {}",
            notification.id,
            request.recipient_id(),
            request.trigger_at
        );
        Ok(Some(notification.id.as_string()))
    }

    async fn cancel(&self, notification_id: &str) -> anyhow::Result<()> {
        let notification_id: ID = notification_id.parse()?;
        if self.notifications.delete(&notification_id).await?.is_none() {
            debug!(
                "Notification {} was already delivered or cancelled",
                notification_id
            );
        }
        Ok(())
    }

    async fn cancel_all(&self) -> anyhow::Result<()> {
        let res = self.notifications.delete_all().await?;
        info!("Cancelled {} scheduled notifications", res.deleted_count);
        Ok(())
    }
}

/// Used where notifications are not supported. Nothing is ever scheduled.
pub struct DisabledNotificationScheduler {}

#[async_trait::async_trait]
impl INotificationScheduler for DisabledNotificationScheduler {
    async fn schedule(&self, request: &NotificationRequest) -> anyhow::Result<Option<String>> {
        info!(
            "Scheduled notifications not supported in this environment, skipping: {}",
            request.title
        );
        Ok(None)
    }

    async fn cancel(&self, _notification_id: &str) -> anyhow::Result<()> {
        info!("Cancel notifications not supported in this environment");
        Ok(())
    }

    async fn cancel_all(&self) -> anyhow::Result<()> {
        info!("Cancel all notifications not supported in this environment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::Repos;
    use care_reminders_domain::NotificationPayload;

    fn request() -> NotificationRequest {
        NotificationRequest {
            title: "Reminder: Walk".into(),
            body: "Around the block".into(),
            payload: NotificationPayload {
                reminder_id: ID::new(),
                patient_id: ID::new(),
                caretaker_id: None,
                kind: None,
            },
            trigger_at: 5000,
        }
    }

    #[tokio::test]
    async fn stored_scheduler_queues_and_cancels() {
        let repos = Repos::create_inmemory();
        let scheduler = StoredNotificationScheduler::new(repos.scheduled_notifications.clone());

        let first = scheduler
            .schedule(&request())
            .await
            .expect("To schedule")
            .expect("To get an id");
        scheduler.schedule(&request()).await.expect("To schedule");
        assert_eq!(repos.scheduled_notifications.find_all().await.unwrap().len(), 2);

        scheduler.cancel(&first).await.expect("To cancel");
        // Cancelling twice is fine
        scheduler.cancel(&first).await.expect("To cancel");
        assert_eq!(repos.scheduled_notifications.find_all().await.unwrap().len(), 1);

        scheduler.cancel_all().await.expect("To cancel all");
        assert!(repos.scheduled_notifications.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn disabled_scheduler_schedules_nothing() {
        let scheduler = DisabledNotificationScheduler {};
        assert_eq!(scheduler.schedule(&request()).await.unwrap(), None);
        assert!(scheduler.cancel("abc").await.is_ok());
        assert!(scheduler.cancel_all().await.is_ok());
    }
}
