use care_reminders_domain::{NotificationRequest, Reminder};
use care_reminders_infra::CareContext;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum NotificationSchedulingError {
    #[error("The notification scheduler failed: {0}")]
    Scheduler(anyhow::Error),
    #[error("Unable to resolve the caretakers of the patient: {0}")]
    Recipients(anyhow::Error),
    #[error("Unable to record the scheduled notifications on the reminder: {0}")]
    Storage(anyhow::Error),
}

/// Schedules one notification for the patient owning the `Reminder` and one
/// for every caretaker linked to that patient, all triggering at the
/// `reminder_time`. Nothing is scheduled when the reminder time has already
/// passed.
///
/// The ids handed out by the scheduler are recorded on the reminder, also
/// when a later step fails.
pub async fn schedule_reminder_notifications(
    reminder: &Reminder,
    ctx: &CareContext,
) -> Result<Vec<String>, NotificationSchedulingError> {
    let now = ctx.sys.get_timestamp_millis();
    if reminder.reminder_time <= now {
        debug!(
            "Reminder {} is due at {} which is not after {}, skipping notifications",
            reminder.id, reminder.reminder_time, now
        );
        return Ok(Vec::new());
    }

    let mut notification_ids = Vec::new();
    let res = fan_out(reminder, ctx, &mut notification_ids).await;

    let recorded = if notification_ids.is_empty() {
        Ok(())
    } else {
        ctx.repos
            .reminders
            .set_notification_ids(&reminder.id, &notification_ids)
            .await
            .map_err(NotificationSchedulingError::Storage)
    };

    res.and(recorded).map(|_| notification_ids)
}

async fn fan_out(
    reminder: &Reminder,
    ctx: &CareContext,
    notification_ids: &mut Vec<String>,
) -> Result<(), NotificationSchedulingError> {
    schedule(ctx, &NotificationRequest::for_patient(reminder), notification_ids).await?;

    let caretaker_ids = ctx
        .repos
        .links
        .find_caretaker_ids_by_patient(&reminder.patient_id)
        .await
        .map_err(NotificationSchedulingError::Recipients)?;
    if caretaker_ids.is_empty() {
        return Ok(());
    }
    // Links pointing to users that no longer exist are skipped
    let caretakers = ctx
        .repos
        .users
        .find_many(&caretaker_ids)
        .await
        .map_err(NotificationSchedulingError::Recipients)?;

    for caretaker in &caretakers {
        let request = NotificationRequest::for_caretaker(reminder, &caretaker.id);
        schedule(ctx, &request, notification_ids).await?;
    }

    Ok(())
}

async fn schedule(
    ctx: &CareContext,
    request: &NotificationRequest,
    notification_ids: &mut Vec<String>,
) -> Result<(), NotificationSchedulingError> {
    let scheduled = ctx
        .notifications
        .schedule(request)
        .await
        .map_err(NotificationSchedulingError::Scheduler)?;
    if let Some(notification_id) = scheduled {
        notification_ids.push(notification_id);
    }
    Ok(())
}
