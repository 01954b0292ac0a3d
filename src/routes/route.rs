use crate::routes::{customer_route, order_route, service_center_route, util_route};
use actix_web::web;

use super::util::openapi_json;

pub fn main_route(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/util").configure(util_route))
        .service(
            web::scope("/service_center")
                .configure(service_center_route)
                .configure(order_route)
                .configure(customer_route),
        )
        .route("/api-docs/openapi.json", web::get().to(openapi_json));
}
