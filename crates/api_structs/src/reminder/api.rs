use crate::dtos::ReminderDTO;
use care_reminders_domain::{Reminder, ReminderStats, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub patient_id: ID,
        #[serde(default)]
        pub patient_name: Option<String>,
        pub title: String,
        #[serde(default)]
        pub description: String,
        pub reminder_time: i64,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod set_reminder_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub status: ReminderStatus,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder_id: ID,
        pub status: ReminderStatus,
    }
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder_id: ID,
        pub deleted: bool,
    }
}

pub mod get_all_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_patient_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub patient_id: ID,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_caretaker_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub caretaker_id: ID,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminder_stats {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub patient_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: ReminderStats,
    }

    impl APIResponse {
        pub fn new(stats: ReminderStats) -> Self {
            Self { stats }
        }
    }
}
