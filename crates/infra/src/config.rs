use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// When set, only `pending` reminders can be marked as taken or missed.
    /// Otherwise a status update always overwrites the current status.
    pub strict_status_transitions: bool,
    /// When set, deleting a reminder also cancels the notifications that
    /// were scheduled for it
    pub cancel_notifications_on_delete: bool,
    /// Notifications are not scheduled at all when this is false
    pub notifications_enabled: bool,
    /// Push gateway which due notifications are posted to. Due notifications
    /// are only logged when this is missing.
    pub notification_webhook_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };

        let notification_webhook_url = std::env::var("NOTIFICATION_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        if notification_webhook_url.is_none() {
            info!("Did not find NOTIFICATION_WEBHOOK_URL environment variable. Due notifications will only be logged.");
        }

        Self {
            port,
            strict_status_transitions: parse_flag("STRICT_STATUS_TRANSITIONS", false),
            cancel_notifications_on_delete: parse_flag("CANCEL_NOTIFICATIONS_ON_DELETE", false),
            notifications_enabled: parse_flag("NOTIFICATIONS_ENABLED", true),
            notification_webhook_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => match parse_bool(&value) {
            Some(flag) => flag,
            None => {
                warn!(
                    "The given {}: {} is not a valid boolean, falling back to: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bool_flags() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" ON "), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
