use crate::{
    notification::dispatch_due_notifications::DispatchDueNotificationsUseCase,
    shared::usecase::execute,
};
use actix_web::rt::time::{interval, sleep_until, Instant};
use care_reminders_infra::CareContext;
use std::time::Duration;
use tracing::info;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Delivers the due notifications at the start of every minute
pub fn start_dispatch_notifications_job(ctx: CareContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(dispatch_due_notifications(context));
        }
    });
}

async fn dispatch_due_notifications(context: CareContext) {
    if let Ok(dispatched) = execute(DispatchDueNotificationsUseCase {}, &context).await {
        if !dispatched.is_empty() {
            info!("Dispatched {} due notifications", dispatched.len());
        }
    }
}
