use crate::dtos::LinkDTO;
use care_reminders_domain::{Link, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub link: LinkDTO,
}

impl LinkResponse {
    pub fn new(link: Link) -> Self {
        Self {
            link: LinkDTO::new(link),
        }
    }
}

pub mod link_caretaker {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub caretaker_id: ID,
        pub patient_id: ID,
    }

    pub type APIResponse = LinkResponse;
}

pub mod unlink_caretaker {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub caretaker_id: ID,
        pub patient_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub caretaker_id: ID,
        pub patient_id: ID,
        pub unlinked: bool,
    }
}

pub mod get_caretaker_patients {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub caretaker_id: ID,
    }

    pub type APIResponse = crate::UsersResponse;
}

pub mod get_patient_caretakers {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub patient_id: ID,
    }

    pub type APIResponse = crate::UsersResponse;
}
