use actix_web::web;

use super::handlers::{dashboard, fetch_profile, login, register, update_profile};
use super::middlewares::RequireServiceCenter;
use crate::constants::{SERVICE_CENTER_ID_REQUIRED, USER_ID_REQUIRED};

pub fn service_center_route(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)));
    cfg.service(web::resource("/login").route(web::post().to(login)));
    cfg.service(
        web::resource("/dashboard")
            .route(web::get().to(dashboard))
            .wrap(RequireServiceCenter::new(USER_ID_REQUIRED)),
    );
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(fetch_profile))
            .route(web::put().to(update_profile))
            .wrap(RequireServiceCenter::new(SERVICE_CENTER_ID_REQUIRED)),
    );
}
