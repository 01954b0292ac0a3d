pub(crate) mod errors;
pub(crate) mod handlers;
mod middlewares;
pub(crate) mod models;
mod routes;
pub(crate) mod schemas;
pub(crate) mod utils;
pub use middlewares::RequireServiceCenter;
pub use routes::service_center_route;
pub use schemas::{ServiceCenterAccount, ServiceCenterQuery};
