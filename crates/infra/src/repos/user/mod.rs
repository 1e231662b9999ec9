mod inmemory;
mod mongo;

pub use inmemory::InMemoryUserRepo;
pub use mongo::MongoUserRepo;

use care_reminders_domain::{Role, User, ID};

/// Directory of the users. Listings are ordered by `created`, newest first.
#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    /// Finds the users with the given ids, unknown ids are ignored
    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>>;
    async fn find_by_role(&self, role: Role) -> anyhow::Result<Vec<User>>;
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
}
