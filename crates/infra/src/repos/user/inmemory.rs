use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use care_reminders_domain::{Role, User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

fn newest_first(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| b.created.cmp(&a.created));
    users
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        save(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(find(user_id, &self.users))
    }

    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>> {
        Ok(find_by(&self.users, |u| user_ids.contains(&u.id)))
    }

    async fn find_by_role(&self, role: Role) -> anyhow::Result<Vec<User>> {
        Ok(newest_first(find_by(&self.users, |u| u.role == role)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(newest_first(find_by(&self.users, |_| true)))
    }
}
