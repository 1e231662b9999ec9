use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Taken,
    Missed,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Taken => "taken",
            Self::Missed => "missed",
        }
    }

    /// Whether a `Reminder` may be explicitly moved into this status.
    /// `Pending` is only ever the initial status.
    pub fn is_settable(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The strict lifecycle: only `Pending` may transition, and only to
    /// `Taken` or `Missed`
    pub fn can_transition_to(&self, next: ReminderStatus) -> bool {
        *self == Self::Pending && next.is_settable()
    }
}

impl Default for ReminderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Error, Debug)]
#[error("Status: {0} is not one of pending, taken or missed")]
pub struct InvalidStatusError(String);

impl FromStr for ReminderStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "taken" => Ok(Self::Taken),
            "missed" => Ok(Self::Missed),
            _ => Err(InvalidStatusError(s.to_string())),
        }
    }
}

/// A `Reminder` is a care task owned by one patient which should be done
/// at `reminder_time`. The patient and every caretaker linked to the patient
/// are notified at that time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The patient owning this `Reminder`, never changes
    pub patient_id: ID,
    /// Copy of the patient's name at creation time. It is not updated if
    /// the patient is renamed later.
    pub patient_name: String,
    pub title: String,
    pub description: String,
    /// Timestamp in millis at which the task is due
    pub reminder_time: i64,
    pub status: ReminderStatus,
    pub created: i64,
    pub updated: i64,
    /// Ids of the notifications that were scheduled for this `Reminder`
    pub notification_ids: Vec<String>,
}

impl Reminder {
    pub fn new(
        patient_id: ID,
        patient_name: String,
        title: String,
        description: String,
        reminder_time: i64,
        now: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            patient_id,
            patient_name,
            title,
            description,
            reminder_time,
            status: ReminderStatus::Pending,
            created: now,
            updated: now,
            notification_ids: Vec::new(),
        }
    }

    /// Name to show in notifications sent to caretakers
    pub fn patient_display_name(&self) -> &str {
        if self.patient_name.is_empty() {
            "Unknown"
        } else {
            &self.patient_name
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Orders by due time, earliest first
pub fn sort_by_reminder_time(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| {
        a.reminder_time
            .cmp(&b.reminder_time)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Orders by creation time, newest first
pub fn sort_by_created_desc(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderStats {
    pub total: usize,
    pub taken: usize,
    pub missed: usize,
    pub pending: usize,
}

impl ReminderStats {
    pub fn from_reminders(reminders: &[Reminder]) -> Self {
        reminders.iter().fold(Self::default(), |mut stats, r| {
            stats.total += 1;
            match r.status {
                ReminderStatus::Taken => stats.taken += 1,
                ReminderStatus::Missed => stats.missed += 1,
                ReminderStatus::Pending => stats.pending += 1,
            }
            stats
        })
    }
}
