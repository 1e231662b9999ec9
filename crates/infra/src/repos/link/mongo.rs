use super::ILinkRepo;
use crate::repos::shared::mongo_repo::{self, parse_id, MongoDocument};
use care_reminders_domain::{Link, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoLinkRepo {
    collection: Collection<Document>,
}

impl MongoLinkRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("caretaker_patients"),
        }
    }
}

#[async_trait::async_trait]
impl ILinkRepo for MongoLinkRepo {
    async fn save(&self, link: &Link) -> anyhow::Result<()> {
        mongo_repo::upsert::<_, LinkMongo>(&self.collection, link).await
    }

    async fn delete(&self, caretaker_id: &ID, patient_id: &ID) -> anyhow::Result<Option<Link>> {
        let key = Link::key(caretaker_id, patient_id);
        mongo_repo::delete::<_, LinkMongo>(&self.collection, &key).await
    }

    async fn find_patient_ids_by_caretaker(&self, caretaker_id: &ID) -> anyhow::Result<Vec<ID>> {
        let filter = doc! {
            "caretaker_id": caretaker_id.inner_ref(),
        };
        let links = mongo_repo::find_many_by::<_, LinkMongo>(&self.collection, filter, None).await?;
        Ok(links.into_iter().map(|l| l.patient_id).collect())
    }

    async fn find_caretaker_ids_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<ID>> {
        let filter = doc! {
            "patient_id": patient_id.inner_ref(),
        };
        let links = mongo_repo::find_many_by::<_, LinkMongo>(&self.collection, filter, None).await?;
        Ok(links.into_iter().map(|l| l.caretaker_id).collect())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LinkMongo {
    _id: String,
    caretaker_id: String,
    patient_id: String,
    linked_at: i64,
}

impl MongoDocument<Link> for LinkMongo {
    fn to_domain(self) -> anyhow::Result<Link> {
        Ok(Link {
            caretaker_id: parse_id(self.caretaker_id)?,
            patient_id: parse_id(self.patient_id)?,
            linked_at: self.linked_at,
        })
    }

    fn from_domain(link: &Link) -> Self {
        Self {
            _id: Link::key(&link.caretaker_id, &link.patient_id),
            caretaker_id: link.caretaker_id.as_string(),
            patient_id: link.patient_id.as_string(),
            linked_at: link.linked_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        mongo_repo::get_id_filter(&self._id)
    }
}
