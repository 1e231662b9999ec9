use care_reminders_domain::{NotificationPayload, ScheduledNotification};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

/// Hands a due notification over to the delivery infrastructure
#[async_trait::async_trait]
pub trait INotificationSender: Send + Sync {
    async fn send(&self, notification: &ScheduledNotification) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationWebhookBody<'a> {
    id: String,
    recipient_id: String,
    title: &'a str,
    body: &'a str,
    data: &'a NotificationPayload,
    trigger_at: i64,
}

impl<'a> NotificationWebhookBody<'a> {
    fn new(notification: &'a ScheduledNotification) -> Self {
        let request = &notification.request;
        Self {
            id: notification.id.as_string(),
            recipient_id: request.recipient_id().as_string(),
            title: &request.title,
            body: &request.body,
            data: &request.payload,
            trigger_at: request.trigger_at,
        }
    }
}

/// Posts due notifications to a push gateway
pub struct WebhookNotificationSender {
    client: Client,
    url: String,
}

impl WebhookNotificationSender {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl INotificationSender for WebhookNotificationSender {
    async fn send(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        match self
            .client
            .post(&self.url)
            .json(&NotificationWebhookBody::new(notification))
            .send()
            .await
        {
            Ok(res) => res.error_for_status().map(|_| ()).map_err(|e| {
                error!(
                    "[Unexpected Response] Notification webhook POST error. Error message: {:?}",
                    e
                );
                anyhow::Error::new(e)
            }),
            Err(e) => {
                error!(
                    "[Network Error] Notification webhook POST error. Error message: {:?}",
                    e
                );
                Err(anyhow::Error::new(e))
            }
        }
    }
}

/// Used when there is no push gateway configured
pub struct LogNotificationSender {}

#[async_trait::async_trait]
impl INotificationSender for LogNotificationSender {
    async fn send(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        let body = serde_json::to_string(&NotificationWebhookBody::new(notification))?;
        info!("Notification due: {}", body);
        Ok(())
    }
}
