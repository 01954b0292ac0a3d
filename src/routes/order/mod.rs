pub(crate) mod handlers;
mod routes;
pub(crate) mod schemas;
pub(crate) mod utils;
pub use routes::order_route;
