mod link;
mod notification;
mod reminder;
mod shared;
mod user;

pub use link::Link;
pub use notification::{
    NotificationKind, NotificationPayload, NotificationRequest, ScheduledNotification,
};
pub use reminder::{
    sort_by_created_desc, sort_by_reminder_time, InvalidStatusError, Reminder, ReminderStats,
    ReminderStatus,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{InvalidRoleError, Role, User, UserStats};
