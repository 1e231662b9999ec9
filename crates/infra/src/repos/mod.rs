mod link;
mod reminder;
mod scheduled_notification;
mod shared;
mod user;

use link::{InMemoryLinkRepo, MongoLinkRepo};
use mongodb::{options::ClientOptions, Client};
use reminder::{InMemoryReminderRepo, MongoReminderRepo};
use scheduled_notification::{InMemoryScheduledNotificationRepo, MongoScheduledNotificationRepo};
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, MongoUserRepo};

pub use link::ILinkRepo;
pub use reminder::IReminderRepo;
pub use scheduled_notification::IScheduledNotificationRepo;
pub use shared::repo::DeleteResult;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub links: Arc<dyn ILinkRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub scheduled_notifications: Arc<dyn IScheduledNotificationRepo>,
}

impl Repos {
    pub async fn create_mongodb(connection_string: &str, db_name: &str) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        db.run_command(mongodb::bson::doc! { "ping": 1 }, None)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            reminders: Arc::new(MongoReminderRepo::new(&db)),
            links: Arc::new(MongoLinkRepo::new(&db)),
            users: Arc::new(MongoUserRepo::new(&db)),
            scheduled_notifications: Arc::new(MongoScheduledNotificationRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            links: Arc::new(InMemoryLinkRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            scheduled_notifications: Arc::new(InMemoryScheduledNotificationRepo::new()),
        }
    }
}
