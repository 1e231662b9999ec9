mod inmemory;
mod mongo;

pub use inmemory::InMemoryReminderRepo;
pub use mongo::MongoReminderRepo;

use care_reminders_domain::{Reminder, ReminderStatus, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// Overwrites the status of an existing `Reminder`, fails if it does not exist
    async fn update_status(
        &self,
        reminder_id: &ID,
        status: ReminderStatus,
        updated: i64,
    ) -> anyhow::Result<()>;
    async fn set_notification_ids(
        &self,
        reminder_id: &ID,
        notification_ids: &[String],
    ) -> anyhow::Result<()>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    async fn find_by_patients(&self, patient_ids: &[ID]) -> anyhow::Result<Vec<Reminder>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use care_reminders_domain::{Reminder, ReminderStatus, ID};

    fn reminder(patient_id: &ID, reminder_time: i64) -> Reminder {
        Reminder::new(
            patient_id.clone(),
            "Ann".into(),
            "Pills".into(),
            "Take them".into(),
            reminder_time,
            10,
        )
    }

    #[tokio::test]
    async fn test_reminder_repo() {
        let ctx = setup_context().await.expect("To setup context");
        let patient_id = ID::new();
        let other_patient_id = ID::new();

        let first = reminder(&patient_id, 200);
        let second = reminder(&patient_id, 100);
        let other = reminder(&other_patient_id, 300);
        for r in &[&first, &second, &other] {
            ctx.repos.reminders.insert(r).await.expect("To insert reminder");
        }

        let found = ctx
            .repos
            .reminders
            .find(&first.id)
            .await
            .expect("To find reminder");
        assert_eq!(found, Some(first.clone()));

        let by_patient = ctx
            .repos
            .reminders
            .find_by_patient(&patient_id)
            .await
            .expect("To query by patient");
        assert_eq!(by_patient.len(), 2);

        let by_patients = ctx
            .repos
            .reminders
            .find_by_patients(&[patient_id.clone(), other_patient_id.clone()])
            .await
            .expect("To query by patients");
        assert_eq!(by_patients.len(), 3);

        ctx.repos
            .reminders
            .update_status(&first.id, ReminderStatus::Taken, 20)
            .await
            .expect("To update status");
        ctx.repos
            .reminders
            .set_notification_ids(&first.id, &["n1".to_string(), "n2".to_string()])
            .await
            .expect("To set notification ids");
        let updated = ctx
            .repos
            .reminders
            .find(&first.id)
            .await
            .expect("To find reminder")
            .expect("Reminder to exist");
        assert_eq!(updated.status, ReminderStatus::Taken);
        assert_eq!(updated.updated, 20);
        assert_eq!(updated.created, 10);
        assert_eq!(updated.notification_ids, vec!["n1", "n2"]);

        assert!(ctx
            .repos
            .reminders
            .update_status(&ID::new(), ReminderStatus::Missed, 30)
            .await
            .is_err());

        let deleted = ctx
            .repos
            .reminders
            .delete(&first.id)
            .await
            .expect("To delete reminder");
        assert!(deleted.is_some());
        assert!(ctx
            .repos
            .reminders
            .find(&first.id)
            .await
            .expect("To query reminder")
            .is_none());
        assert!(ctx
            .repos
            .reminders
            .delete(&first.id)
            .await
            .expect("To delete reminder")
            .is_none());
    }
}
