mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, ILinkRepo, IReminderRepo, IScheduledNotificationRepo, IUserRepo, Repos,
};
pub use services::notifications::*;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use tracing::info;

/// Everything a use case needs to talk to the outside world
#[derive(Clone)]
pub struct CareContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: Arc<dyn INotificationScheduler>,
    pub notification_sender: Arc<dyn INotificationSender>,
}

struct ContextParams {
    // (connection_string, db_name)
    pub mongodb: (String, String),
}

impl CareContext {
    /// Wires up the notification services for the given repos
    pub fn new(repos: Repos, config: Config) -> Self {
        let notifications: Arc<dyn INotificationScheduler> = if config.notifications_enabled {
            Arc::new(StoredNotificationScheduler::new(
                repos.scheduled_notifications.clone(),
            ))
        } else {
            info!("Notifications are disabled");
            Arc::new(DisabledNotificationScheduler {})
        };
        let notification_sender: Arc<dyn INotificationSender> =
            match &config.notification_webhook_url {
                Some(url) => Arc::new(WebhookNotificationSender::new(url.clone())),
                None => Arc::new(LogNotificationSender {}),
            };

        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifications,
            notification_sender,
        }
    }

    pub fn create_inmemory() -> Self {
        Self::new(Repos::create_inmemory(), Config::new())
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_mongodb(&params.mongodb.0, &params.mongodb.1).await?;
        Ok(Self::new(repos, Config::new()))
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<CareContext> {
    const MONGODB_CONNECTION_STRING: &str = "MONGODB_CONNECTION_STRING";
    const MONGODB_NAME: &str = "MONGODB_NAME";

    match (
        std::env::var(MONGODB_CONNECTION_STRING),
        std::env::var(MONGODB_NAME),
    ) {
        (Ok(connection_string), Ok(db_name)) => {
            info!(
                "{} and {} env vars was provided. Going to use mongodb.",
                MONGODB_CONNECTION_STRING, MONGODB_NAME
            );
            CareContext::create(ContextParams {
                mongodb: (connection_string, db_name),
            })
            .await
        }
        _ => {
            info!(
                "{} and {} env vars was not provided. Going to use inmemory infra.",
                MONGODB_CONNECTION_STRING, MONGODB_NAME
            );
            Ok(CareContext::create_inmemory())
        }
    }
}
