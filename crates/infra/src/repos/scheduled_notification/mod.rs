mod inmemory;
mod mongo;

pub use inmemory::InMemoryScheduledNotificationRepo;
pub use mongo::MongoScheduledNotificationRepo;

use crate::repos::shared::repo::DeleteResult;
use care_reminders_domain::{ScheduledNotification, ID};

/// Queue of the notifications waiting to be delivered
#[async_trait::async_trait]
pub trait IScheduledNotificationRepo: Send + Sync {
    async fn insert(&self, notification: &ScheduledNotification) -> anyhow::Result<()>;
    async fn find(&self, notification_id: &ID) -> anyhow::Result<Option<ScheduledNotification>>;
    async fn find_all(&self) -> anyhow::Result<Vec<ScheduledNotification>>;
    async fn delete(&self, notification_id: &ID)
        -> anyhow::Result<Option<ScheduledNotification>>;
    async fn delete_all(&self) -> anyhow::Result<DeleteResult>;
    /// Removes and returns every notification triggering at or before `before_inc`
    async fn delete_all_before(&self, before_inc: i64)
        -> anyhow::Result<Vec<ScheduledNotification>>;
}
