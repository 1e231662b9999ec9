mod base;
mod link;
mod reminder;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use care_reminders_api_structs::dtos::*;
pub use care_reminders_domain::{ReminderStats, ReminderStatus, Role, UserStats, ID};
use link::LinkClient;
pub use link::LinkInput;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, SetReminderStatusInput};
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{CreateUserInput, UpdateUserInput};

// Domain
pub use care_reminders_api_structs::dtos::LinkDTO as Link;
pub use care_reminders_api_structs::dtos::ReminderDTO as Reminder;
pub use care_reminders_api_structs::dtos::UserDTO as User;

/// Care Reminders Server SDK
///
/// The SDK contains methods for interacting with the Care Reminders server
/// API.
#[derive(Clone)]
pub struct CareSDK {
    pub link: LinkClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl CareSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let link = LinkClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            link,
            reminder,
            status,
            user,
        }
    }
}
