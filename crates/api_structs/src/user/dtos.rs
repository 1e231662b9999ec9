use care_reminders_domain::{Role, User, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            name: user.name,
            email: user.email,
            phone: user.phone,
            created: user.created,
            updated: user.updated,
        }
    }
}
