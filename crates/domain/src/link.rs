use crate::shared::entity::{Entity, ID};

/// A `Link` grants a caretaker visibility into the reminders of a patient.
///
/// A pair of users is linked at most once, the composite of the two ids
/// is the identity of the `Link`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub caretaker_id: ID,
    pub patient_id: ID,
    pub linked_at: i64,
}

impl Link {
    pub fn new(caretaker_id: ID, patient_id: ID, linked_at: i64) -> Self {
        Self {
            caretaker_id,
            patient_id,
            linked_at,
        }
    }

    pub fn key(caretaker_id: &ID, patient_id: &ID) -> String {
        format!("{}_{}", caretaker_id, patient_id)
    }

    pub fn is_between(&self, caretaker_id: &ID, patient_id: &ID) -> bool {
        self.caretaker_id == *caretaker_id && self.patient_id == *patient_id
    }
}

impl Entity for Link {
    fn id(&self) -> ID {
        // Both ids are non-empty, so the key is a valid id
        Link::key(&self.caretaker_id, &self.patient_id)
            .parse()
            .unwrap_or_default()
    }
}
