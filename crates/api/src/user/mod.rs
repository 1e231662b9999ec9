mod create_user;
mod get_user;
mod get_user_stats;
mod get_users;
mod update_user;

use actix_web::web;
use create_user::create_user_controller;
use get_user::get_user_controller;
use get_user_stats::get_user_stats_controller;
use get_users::get_users_controller;
use update_user::update_user_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(create_user_controller));
    cfg.route("/users", web::get().to(get_users_controller));
    // Registered before `/users/{user_id}` so that it is not taken for an id
    cfg.route("/users/stats", web::get().to(get_user_stats_controller));
    cfg.route("/users/{user_id}", web::get().to(get_user_controller));
    cfg.route("/users/{user_id}", web::put().to(update_user_controller));
}
