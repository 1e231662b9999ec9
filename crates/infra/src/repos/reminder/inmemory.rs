use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use care_reminders_domain::{Reminder, ReminderStatus, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn update_status(
        &self,
        reminder_id: &ID,
        status: ReminderStatus,
        updated: i64,
    ) -> anyhow::Result<()> {
        let found = update(reminder_id, &self.reminders, |r| {
            r.status = status;
            r.updated = updated;
        });
        if !found {
            return Err(anyhow::anyhow!("No document to update: {}", reminder_id));
        }
        Ok(())
    }

    async fn set_notification_ids(
        &self,
        reminder_id: &ID,
        notification_ids: &[String],
    ) -> anyhow::Result<()> {
        let found = update(reminder_id, &self.reminders, |r| {
            r.notification_ids = notification_ids.to_vec();
        });
        if !found {
            return Err(anyhow::anyhow!("No document to update: {}", reminder_id));
        }
        Ok(())
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete(reminder_id, &self.reminders))
    }

    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.patient_id == *patient_id))
    }

    async fn find_by_patients(&self, patient_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| patient_ids.contains(&r.patient_id)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |_| true))
    }
}
