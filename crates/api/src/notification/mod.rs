pub mod dispatch_due_notifications;
