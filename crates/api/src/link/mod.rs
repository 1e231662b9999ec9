mod get_caretaker_patients;
mod get_patient_caretakers;
mod link_caretaker;
mod unlink_caretaker;

use actix_web::web;
use get_caretaker_patients::get_caretaker_patients_controller;
use get_patient_caretakers::get_patient_caretakers_controller;
use link_caretaker::link_caretaker_controller;
use unlink_caretaker::unlink_caretaker_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/links", web::post().to(link_caretaker_controller));
    cfg.route(
        "/links/{caretaker_id}/{patient_id}",
        web::delete().to(unlink_caretaker_controller),
    );

    cfg.route(
        "/caretakers/{caretaker_id}/patients",
        web::get().to(get_caretaker_patients_controller),
    );
    cfg.route(
        "/patients/{patient_id}/caretakers",
        web::get().to(get_patient_caretakers_controller),
    );
}
