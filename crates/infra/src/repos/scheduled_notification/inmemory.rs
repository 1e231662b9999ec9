use super::IScheduledNotificationRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use care_reminders_domain::{ScheduledNotification, ID};

pub struct InMemoryScheduledNotificationRepo {
    notifications: std::sync::Mutex<Vec<ScheduledNotification>>,
}

impl InMemoryScheduledNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IScheduledNotificationRepo for InMemoryScheduledNotificationRepo {
    async fn insert(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> anyhow::Result<Option<ScheduledNotification>> {
        Ok(find(notification_id, &self.notifications))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ScheduledNotification>> {
        Ok(find_by(&self.notifications, |_| true))
    }

    async fn delete(
        &self,
        notification_id: &ID,
    ) -> anyhow::Result<Option<ScheduledNotification>> {
        Ok(delete(notification_id, &self.notifications))
    }

    async fn delete_all(&self) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.notifications, |_| true))
    }

    async fn delete_all_before(
        &self,
        before_inc: i64,
    ) -> anyhow::Result<Vec<ScheduledNotification>> {
        Ok(find_and_delete_by(&self.notifications, |n| {
            n.trigger_at() <= before_inc
        }))
    }
}
