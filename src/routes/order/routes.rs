use actix_web::web;

use super::handlers::{list_cancelled_orders, list_orders, update_order_status};
use crate::constants::SERVICE_CENTER_ID_REQUIRED;
use crate::routes::service_center::RequireServiceCenter;

pub fn order_route(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::get().to(list_orders))
            .wrap(RequireServiceCenter::new(SERVICE_CENTER_ID_REQUIRED)),
    );
    cfg.service(
        web::resource("/orders/cancelled")
            .route(web::get().to(list_cancelled_orders))
            .wrap(RequireServiceCenter::new(SERVICE_CENTER_ID_REQUIRED)),
    );
    cfg.service(
        web::resource("/orders/{order_id}/status")
            .route(web::post().to(update_order_status))
            .wrap(RequireServiceCenter::new(SERVICE_CENTER_ID_REQUIRED)),
    );
}
