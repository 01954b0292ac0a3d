use actix_web::web;

use super::handlers::{list_customers, list_feedback_contacts};
use crate::constants::SERVICE_CENTER_ID_REQUIRED;
use crate::routes::service_center::RequireServiceCenter;

pub fn customer_route(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers")
            .route(web::get().to(list_customers))
            .wrap(RequireServiceCenter::new(SERVICE_CENTER_ID_REQUIRED)),
    );
    cfg.service(
        web::resource("/feedback_contacts")
            .route(web::get().to(list_feedback_contacts))
            .wrap(RequireServiceCenter::new(SERVICE_CENTER_ID_REQUIRED)),
    );
}
