use care_reminders_domain::{Reminder, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub patient_id: ID,
    pub patient_name: String,
    pub title: String,
    pub description: String,
    pub reminder_time: i64,
    pub status: ReminderStatus,
    pub created: i64,
    pub updated: i64,
    pub notification_ids: Vec<String>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            patient_id: reminder.patient_id,
            patient_name: reminder.patient_name,
            title: reminder.title,
            description: reminder.description,
            reminder_time: reminder.reminder_time,
            status: reminder.status,
            created: reminder.created,
            updated: reminder.updated,
            notification_ids: reminder.notification_ids,
        }
    }
}
