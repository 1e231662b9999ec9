use super::IReminderRepo;
use crate::repos::shared::mongo_repo::{self, parse_id, MongoDocument};
use care_reminders_domain::{Reminder, ReminderStatus, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoReminderRepo {
    collection: Collection<Document>,
}

impl MongoReminderRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("reminders"),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        mongo_repo::find::<_, ReminderMongo>(&self.collection, reminder_id.inner_ref()).await
    }

    async fn update_status(
        &self,
        reminder_id: &ID,
        status: ReminderStatus,
        updated: i64,
    ) -> anyhow::Result<()> {
        let update = doc! {
            "status": status.as_str(),
            "updated": updated,
        };
        mongo_repo::update_one(&self.collection, reminder_id.inner_ref(), update).await
    }

    async fn set_notification_ids(
        &self,
        reminder_id: &ID,
        notification_ids: &[String],
    ) -> anyhow::Result<()> {
        let update = doc! {
            "notification_ids": notification_ids.to_vec(),
        };
        mongo_repo::update_one(&self.collection, reminder_id.inner_ref(), update).await
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        mongo_repo::delete::<_, ReminderMongo>(&self.collection, reminder_id.inner_ref()).await
    }

    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "patient_id": patient_id.inner_ref(),
        };
        let sort = doc! { "reminder_time": 1 };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, filter, Some(sort)).await
    }

    async fn find_by_patients(&self, patient_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "patient_id": {
                "$in": patient_ids.iter().map(|id| id.inner_ref()).collect::<Vec<_>>()
            }
        };
        let sort = doc! { "reminder_time": 1 };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, filter, Some(sort)).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let sort = doc! { "created": -1 };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, doc! {}, Some(sort)).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: String,
    patient_id: String,
    patient_name: String,
    title: String,
    description: String,
    reminder_time: i64,
    status: ReminderStatus,
    created: i64,
    updated: i64,
    #[serde(default)]
    notification_ids: Vec<String>,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn to_domain(self) -> anyhow::Result<Reminder> {
        Ok(Reminder {
            id: parse_id(self._id)?,
            patient_id: parse_id(self.patient_id)?,
            patient_name: self.patient_name,
            title: self.title,
            description: self.description,
            reminder_time: self.reminder_time,
            status: self.status,
            created: self.created,
            updated: self.updated,
            notification_ids: self.notification_ids,
        })
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            _id: reminder.id.as_string(),
            patient_id: reminder.patient_id.as_string(),
            patient_name: reminder.patient_name.clone(),
            title: reminder.title.clone(),
            description: reminder.description.clone(),
            reminder_time: reminder.reminder_time,
            status: reminder.status,
            created: reminder.created,
            updated: reminder.updated,
            notification_ids: reminder.notification_ids.clone(),
        }
    }

    fn get_id_filter(&self) -> Document {
        mongo_repo::get_id_filter(&self._id)
    }
}
