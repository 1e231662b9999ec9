mod inmemory;
mod mongo;

pub use inmemory::InMemoryLinkRepo;
pub use mongo::MongoLinkRepo;

use care_reminders_domain::{Link, ID};

/// Registry of the caretaker to patient relationships
#[async_trait::async_trait]
pub trait ILinkRepo: Send + Sync {
    /// Stores the `Link`, replacing an existing one between the same users
    async fn save(&self, link: &Link) -> anyhow::Result<()>;
    async fn delete(&self, caretaker_id: &ID, patient_id: &ID) -> anyhow::Result<Option<Link>>;
    async fn find_patient_ids_by_caretaker(&self, caretaker_id: &ID) -> anyhow::Result<Vec<ID>>;
    async fn find_caretaker_ids_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<ID>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use care_reminders_domain::{Link, ID};

    #[tokio::test]
    async fn test_link_repo() {
        let ctx = setup_context().await.expect("To setup context");
        let caretaker_id = ID::new();
        let patient_id = ID::new();
        let other_patient_id = ID::new();

        let link = Link::new(caretaker_id.clone(), patient_id.clone(), 10);
        ctx.repos.links.save(&link).await.expect("To save link");
        // Linking the same pair again overwrites
        let relinked = Link::new(caretaker_id.clone(), patient_id.clone(), 20);
        ctx.repos.links.save(&relinked).await.expect("To save link");
        ctx.repos
            .links
            .save(&Link::new(
                caretaker_id.clone(),
                other_patient_id.clone(),
                30,
            ))
            .await
            .expect("To save link");

        let mut patient_ids = ctx
            .repos
            .links
            .find_patient_ids_by_caretaker(&caretaker_id)
            .await
            .expect("To query links");
        patient_ids.sort();
        let mut expected = vec![patient_id.clone(), other_patient_id.clone()];
        expected.sort();
        assert_eq!(patient_ids, expected);

        let caretaker_ids = ctx
            .repos
            .links
            .find_caretaker_ids_by_patient(&patient_id)
            .await
            .expect("To query links");
        assert_eq!(caretaker_ids, vec![caretaker_id.clone()]);

        let deleted = ctx
            .repos
            .links
            .delete(&caretaker_id, &patient_id)
            .await
            .expect("To delete link");
        assert_eq!(deleted, Some(relinked));
        assert!(ctx
            .repos
            .links
            .find_caretaker_ids_by_patient(&patient_id)
            .await
            .expect("To query links")
            .is_empty());
        assert!(ctx
            .repos
            .links
            .delete(&caretaker_id, &patient_id)
            .await
            .expect("To delete link")
            .is_none());
    }
}
