mod create_reminder;
mod delete_reminder;
mod get_all_reminders;
mod get_caretaker_reminders;
mod get_patient_reminders;
mod get_reminder;
mod get_reminder_stats;
pub mod schedule_reminder_notifications;
mod set_reminder_status;
mod subscribers;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_all_reminders::get_all_reminders_controller;
use get_caretaker_reminders::get_caretaker_reminders_controller;
use get_patient_reminders::get_patient_reminders_controller;
use get_reminder::get_reminder_controller;
use get_reminder_stats::get_reminder_stats_controller;
use set_reminder_status::set_reminder_status_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_all_reminders_controller));

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/status",
        web::put().to(set_reminder_status_controller),
    );

    cfg.route(
        "/patients/{patient_id}/reminders",
        web::get().to(get_patient_reminders_controller),
    );
    cfg.route(
        "/patients/{patient_id}/reminders/stats",
        web::get().to(get_reminder_stats_controller),
    );
    cfg.route(
        "/caretakers/{caretaker_id}/reminders",
        web::get().to(get_caretaker_reminders_controller),
    );
}
