pub(crate) mod handlers;
mod routes;
pub use handlers::openapi_json;
pub use routes::util_route;
