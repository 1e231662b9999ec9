use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Caretaker,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Caretaker => "caretaker",
            Self::Admin => "admin",
        }
    }
}

#[derive(Error, Debug)]
#[error("Role: {0} is not one of patient, caretaker or admin")]
pub struct InvalidRoleError(String);

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Self::Patient),
            "caretaker" => Ok(Self::Caretaker),
            "admin" => Ok(Self::Admin),
            _ => Err(InvalidRoleError(s.to_string())),
        }
    }
}

/// A person using the application. Reminders are owned by `Role::Patient`
/// users and followed by the `Role::Caretaker` users linked to them.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl User {
    pub fn new(role: Role, name: String, email: String, now: i64) -> Self {
        Self {
            id: Default::default(),
            role,
            name,
            email,
            phone: None,
            created: now,
            updated: now,
        }
    }

    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }

    pub fn is_caretaker(&self) -> bool {
        self.role == Role::Caretaker
    }
}

impl Entity for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Counts shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub patients: usize,
    pub caretakers: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        users.iter().fold(Self::default(), |mut stats, user| {
            stats.total_users += 1;
            match user.role {
                Role::Patient => stats.patients += 1,
                Role::Caretaker => stats.caretakers += 1,
                Role::Admin => (),
            }
            stats
        })
    }
}
