use care_reminders_domain::{Link, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LinkDTO {
    pub caretaker_id: ID,
    pub patient_id: ID,
    pub linked_at: i64,
}

impl LinkDTO {
    pub fn new(link: Link) -> Self {
        Self {
            caretaker_id: link.caretaker_id,
            patient_id: link.patient_id,
            linked_at: link.linked_at,
        }
    }
}
