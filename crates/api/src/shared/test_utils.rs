use care_reminders_domain::{NotificationRequest, Reminder, ReminderStatus, Role, User, ID};
use care_reminders_infra::{
    CareContext, FixedSys, INotificationScheduler, IReminderRepo, StoredNotificationScheduler,
};
use std::sync::Arc;

pub const NOW: i64 = 1_000_000;

/// In-memory context with a fixed clock at `NOW`, stored notifications
/// and the permissive defaults
pub fn setup_test_context() -> CareContext {
    let mut ctx = CareContext::create_inmemory();
    ctx.sys = Arc::new(FixedSys::new(NOW));
    ctx.notifications = Arc::new(StoredNotificationScheduler::new(
        ctx.repos.scheduled_notifications.clone(),
    ));
    ctx.config.strict_status_transitions = false;
    ctx.config.cancel_notifications_on_delete = false;
    ctx
}

pub async fn insert_user(ctx: &CareContext, role: Role, name: &str) -> User {
    let user = User::new(
        role,
        name.into(),
        format!("{}@example.com", name.to_lowercase()),
        ctx.sys.get_timestamp_millis(),
    );
    ctx.repos.users.insert(&user).await.unwrap();
    user
}

/// Scheduler for a runtime where the notification service is unavailable
pub struct FailingNotificationScheduler {}

#[async_trait::async_trait]
impl INotificationScheduler for FailingNotificationScheduler {
    async fn schedule(&self, _request: &NotificationRequest) -> anyhow::Result<Option<String>> {
        Err(anyhow::Error::msg("Notification service unavailable"))
    }

    async fn cancel(&self, _notification_id: &str) -> anyhow::Result<()> {
        Err(anyhow::Error::msg("Notification service unavailable"))
    }

    async fn cancel_all(&self) -> anyhow::Result<()> {
        Err(anyhow::Error::msg("Notification service unavailable"))
    }
}

/// Reminder store that is never reachable
pub struct UnreachableReminderRepo {}

fn unreachable() -> anyhow::Error {
    anyhow::Error::msg("Reminder store is unreachable")
}

#[async_trait::async_trait]
impl IReminderRepo for UnreachableReminderRepo {
    async fn insert(&self, _reminder: &Reminder) -> anyhow::Result<()> {
        Err(unreachable())
    }
    async fn find(&self, _reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Err(unreachable())
    }
    async fn update_status(
        &self,
        _reminder_id: &ID,
        _status: ReminderStatus,
        _updated: i64,
    ) -> anyhow::Result<()> {
        Err(unreachable())
    }
    async fn set_notification_ids(
        &self,
        _reminder_id: &ID,
        _notification_ids: &[String],
    ) -> anyhow::Result<()> {
        Err(unreachable())
    }
    async fn delete(&self, _reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Err(unreachable())
    }
    async fn find_by_patient(&self, _patient_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        Err(unreachable())
    }
    async fn find_by_patients(&self, _patient_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        Err(unreachable())
    }
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Err(unreachable())
    }
}
