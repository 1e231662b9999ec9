use crate::{
    shared::entity::{Entity, ID},
    Reminder,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CaretakerNotification,
}

/// Data attached to a notification so that the receiving device can
/// navigate to the `Reminder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub reminder_id: ID,
    pub patient_id: ID,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caretaker_id: Option<ID>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,
}

/// A notification which should be delivered at `trigger_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub payload: NotificationPayload,
    pub trigger_at: i64,
}

impl NotificationRequest {
    /// The notification sent to the patient owning the `Reminder`
    pub fn for_patient(reminder: &Reminder) -> Self {
        Self {
            title: format!("Reminder: {}", reminder.title),
            body: reminder.description.clone(),
            payload: NotificationPayload {
                reminder_id: reminder.id.clone(),
                patient_id: reminder.patient_id.clone(),
                caretaker_id: None,
                kind: None,
            },
            trigger_at: reminder.reminder_time,
        }
    }

    /// The notification sent to a caretaker linked to the patient
    pub fn for_caretaker(reminder: &Reminder, caretaker_id: &ID) -> Self {
        Self {
            title: format!("Patient Reminder: {}", reminder.title),
            body: format!(
                "Patient {} has a reminder: {}",
                reminder.patient_display_name(),
                reminder.description
            ),
            payload: NotificationPayload {
                reminder_id: reminder.id.clone(),
                patient_id: reminder.patient_id.clone(),
                caretaker_id: Some(caretaker_id.clone()),
                kind: Some(NotificationKind::CaretakerNotification),
            },
            trigger_at: reminder.reminder_time,
        }
    }

    /// The user this notification is addressed to
    pub fn recipient_id(&self) -> &ID {
        self.payload
            .caretaker_id
            .as_ref()
            .unwrap_or(&self.payload.patient_id)
    }
}

/// A `NotificationRequest` waiting in the queue to be delivered
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNotification {
    pub id: ID,
    pub request: NotificationRequest,
}

impl ScheduledNotification {
    pub fn new(request: NotificationRequest) -> Self {
        Self {
            id: Default::default(),
            request,
        }
    }

    pub fn trigger_at(&self) -> i64 {
        self.request.trigger_at
    }
}

impl Entity for ScheduledNotification {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(patient_name: &str) -> Reminder {
        Reminder::new(
            ID::new(),
            patient_name.into(),
            "Insulin".into(),
            "Before lunch".into(),
            1000,
            0,
        )
    }

    #[test]
    fn patient_notification() {
        let r = reminder("Ann");
        let n = NotificationRequest::for_patient(&r);
        assert_eq!(n.title, "Reminder: Insulin");
        assert_eq!(n.body, "Before lunch");
        assert_eq!(n.trigger_at, 1000);
        assert_eq!(n.payload.caretaker_id, None);
        assert_eq!(n.payload.kind, None);
        assert_eq!(n.recipient_id(), &r.patient_id);
    }

    #[test]
    fn caretaker_notification() {
        let r = reminder("");
        let caretaker_id = ID::new();
        let n = NotificationRequest::for_caretaker(&r, &caretaker_id);
        assert_eq!(n.title, "Patient Reminder: Insulin");
        assert_eq!(n.body, "Patient Unknown has a reminder: Before lunch");
        assert_eq!(n.payload.kind, Some(NotificationKind::CaretakerNotification));
        assert_eq!(n.recipient_id(), &caretaker_id);
    }
}
