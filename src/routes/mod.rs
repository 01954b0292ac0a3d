pub(crate) mod customer;
pub(crate) mod order;
mod route;
pub(crate) mod service_center;
pub(crate) mod util;
pub use customer::customer_route;
pub use order::order_route;
pub use route::main_route;
pub use service_center::service_center_route;
pub use util::util_route;
