use super::IScheduledNotificationRepo;
use crate::repos::shared::{
    mongo_repo::{self, parse_id, MongoDocument},
    repo::DeleteResult,
};
use care_reminders_domain::{
    NotificationKind, NotificationPayload, NotificationRequest, ScheduledNotification, ID,
};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoScheduledNotificationRepo {
    collection: Collection<Document>,
}

impl MongoScheduledNotificationRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("scheduled_notifications"),
        }
    }
}

#[async_trait::async_trait]
impl IScheduledNotificationRepo for MongoScheduledNotificationRepo {
    async fn insert(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ScheduledNotificationMongo>(&self.collection, notification).await
    }

    async fn find(&self, notification_id: &ID) -> anyhow::Result<Option<ScheduledNotification>> {
        mongo_repo::find::<_, ScheduledNotificationMongo>(
            &self.collection,
            notification_id.inner_ref(),
        )
        .await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ScheduledNotification>> {
        let sort = doc! { "trigger_at": 1 };
        mongo_repo::find_many_by::<_, ScheduledNotificationMongo>(
            &self.collection,
            doc! {},
            Some(sort),
        )
        .await
    }

    async fn delete(
        &self,
        notification_id: &ID,
    ) -> anyhow::Result<Option<ScheduledNotification>> {
        mongo_repo::delete::<_, ScheduledNotificationMongo>(
            &self.collection,
            notification_id.inner_ref(),
        )
        .await
    }

    async fn delete_all(&self) -> anyhow::Result<DeleteResult> {
        mongo_repo::delete_many_by(&self.collection, doc! {}).await
    }

    async fn delete_all_before(
        &self,
        before_inc: i64,
    ) -> anyhow::Result<Vec<ScheduledNotification>> {
        let filter = doc! {
            "trigger_at": {
                "$lte": before_inc
            }
        };

        // Find before deleting
        let notifications = mongo_repo::find_many_by::<_, ScheduledNotificationMongo>(
            &self.collection,
            filter,
            None,
        )
        .await?;

        // Only delete what was read, anything scheduled in between stays queued
        let ids = notifications
            .iter()
            .map(|n| n.id.as_string())
            .collect::<Vec<_>>();
        mongo_repo::delete_many_by(&self.collection, doc! { "_id": { "$in": ids } }).await?;

        Ok(notifications)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ScheduledNotificationMongo {
    _id: String,
    title: String,
    body: String,
    reminder_id: String,
    patient_id: String,
    caretaker_id: Option<String>,
    kind: Option<NotificationKind>,
    trigger_at: i64,
}

impl MongoDocument<ScheduledNotification> for ScheduledNotificationMongo {
    fn to_domain(self) -> anyhow::Result<ScheduledNotification> {
        let caretaker_id = match self.caretaker_id {
            Some(id) => Some(parse_id(id)?),
            None => None,
        };
        Ok(ScheduledNotification {
            id: parse_id(self._id)?,
            request: NotificationRequest {
                title: self.title,
                body: self.body,
                payload: NotificationPayload {
                    reminder_id: parse_id(self.reminder_id)?,
                    patient_id: parse_id(self.patient_id)?,
                    caretaker_id,
                    kind: self.kind,
                },
                trigger_at: self.trigger_at,
            },
        })
    }

    fn from_domain(notification: &ScheduledNotification) -> Self {
        let request = &notification.request;
        Self {
            _id: notification.id.as_string(),
            title: request.title.clone(),
            body: request.body.clone(),
            reminder_id: request.payload.reminder_id.as_string(),
            patient_id: request.payload.patient_id.as_string(),
            caretaker_id: request.payload.caretaker_id.as_ref().map(|id| id.as_string()),
            kind: request.payload.kind,
            trigger_at: request.trigger_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        mongo_repo::get_id_filter(&self._id)
    }
}
