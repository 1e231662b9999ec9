use super::ILinkRepo;
use crate::repos::shared::inmemory_repo::*;
use care_reminders_domain::{Link, ID};

pub struct InMemoryLinkRepo {
    links: std::sync::Mutex<Vec<Link>>,
}

impl InMemoryLinkRepo {
    pub fn new() -> Self {
        Self {
            links: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ILinkRepo for InMemoryLinkRepo {
    async fn save(&self, link: &Link) -> anyhow::Result<()> {
        upsert(link, &self.links);
        Ok(())
    }

    async fn delete(&self, caretaker_id: &ID, patient_id: &ID) -> anyhow::Result<Option<Link>> {
        let mut deleted = find_and_delete_by(&self.links, |l| l.is_between(caretaker_id, patient_id));
        Ok(deleted.pop())
    }

    async fn find_patient_ids_by_caretaker(&self, caretaker_id: &ID) -> anyhow::Result<Vec<ID>> {
        Ok(find_by(&self.links, |l| l.caretaker_id == *caretaker_id)
            .into_iter()
            .map(|l| l.patient_id)
            .collect())
    }

    async fn find_caretaker_ids_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<ID>> {
        Ok(find_by(&self.links, |l| l.patient_id == *patient_id)
            .into_iter()
            .map(|l| l.caretaker_id)
            .collect())
    }
}
