mod scheduler;
mod sender;

pub use scheduler::{
    DisabledNotificationScheduler, INotificationScheduler, StoredNotificationScheduler,
};
pub use sender::{INotificationSender, LogNotificationSender, WebhookNotificationSender};
